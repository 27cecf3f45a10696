use actix_web::{HttpResponse, Responder};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = Object, example = json!({
            "message": "Welcome to the attendance tracker"
        }))
    ),
    tag = "Welcome"
)]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the attendance tracker"
    }))
}
