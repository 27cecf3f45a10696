use actix_web::{HttpResponse, Responder, web};

use crate::service::OverviewAggregator;

/// Department attendance overview
#[utoipa::path(
    get,
    path = "/overview/{department}",
    params(
        ("department", Path, description = "Department name, matched exactly")
    ),
    responses(
        (status = 200, description = "Employees of the department with their records and totals", body = crate::model::overview::Overview),
        (status = 500, description = "Internal server error")
    ),
    tag = "Overview"
)]
pub async fn overview(
    aggregator: web::Data<OverviewAggregator>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let department = path.into_inner();
    let overview = aggregator.build_overview(&department).await?;

    Ok(HttpResponse::Ok().json(overview))
}
