use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::employee::redirect_to_employees,
    error::{AppError, ValidationError},
    model::attendance::AttendanceStatus,
    service::{AttendanceService, EmployeeService},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusForm {
    /// `present` or `absent`
    #[schema(example = "present")]
    pub status: Option<String>,
}

fn parse_status(raw: Option<&str>) -> Result<AttendanceStatus, ValidationError> {
    match raw {
        None | Some("") => Err(ValidationError::MissingField("status")),
        Some(text) => text
            .parse()
            .map_err(|_| ValidationError::InvalidStatus(text.to_string())),
    }
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/update_attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body(
        content = StatusForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 302, description = "Recorded, redirects to /employees"),
        (status = 400, description = "Missing or unrecognised status", body = Object, example = json!({
            "message": "invalid attendance status: late"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "employee 42 not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    attendance: web::Data<AttendanceService>,
    path: web::Path<i64>,
    form: web::Form<StatusForm>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let status = parse_status(form.status.as_deref())?;

    attendance.mark_attendance(employee_id, status).await?;

    Ok(redirect_to_employees())
}

/// Attendance history of one employee
#[utoipa::path(
    get,
    path = "/employees/{employee_id}/attendance",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Records in creation order", body = [crate::model::attendance::AttendanceRecord]),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    employees: web::Data<EmployeeService>,
    attendance: web::Data<AttendanceService>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    if employees.find(employee_id).await?.is_none() {
        return Err(AppError::EmployeeNotFound(employee_id).into());
    }

    let records = attendance.list_for_employee(employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_form_values() {
        assert_eq!(parse_status(Some("present")), Ok(AttendanceStatus::Present));
        assert_eq!(parse_status(Some("absent")), Ok(AttendanceStatus::Absent));
        assert_eq!(parse_status(None), Err(ValidationError::MissingField("status")));
        assert_eq!(parse_status(Some("")), Err(ValidationError::MissingField("status")));
        assert_eq!(
            parse_status(Some("ABSENT")),
            Err(ValidationError::InvalidStatus("ABSENT".to_string()))
        );
    }
}
