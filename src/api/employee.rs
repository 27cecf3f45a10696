use actix_web::{HttpResponse, Responder, http::header, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::{error::AppError, service::EmployeeService};

const ADD_EMPLOYEE_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><title>Add Employee</title></head>
<body>
<h1>Add Employee</h1>
<form method="post" action="/add_employee">
  <label>Name <input type="text" name="name" required></label><br>
  <label>Designation <input type="text" name="designation" required></label><br>
  <label>Date of joining <input type="date" name="date_of_joining" required></label><br>
  <label>Department <input type="text" name="department"></label><br>
  <button type="submit">Add</button>
</form>
</body>
</html>
"#;

/// Form fields are optional so that a missing field reaches validation
/// instead of failing extraction.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddEmployeeForm {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "Software Engineer")]
    pub designation: Option<String>,
    #[schema(example = "2024-01-01", format = "date")]
    pub date_of_joining: Option<String>,
    #[schema(example = "IT")]
    pub department: Option<String>,
}

pub(crate) fn redirect_to_employees() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/employees"))
        .finish()
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees in insertion order", body = [crate::model::employee::Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    employees: web::Data<EmployeeService>,
) -> actix_web::Result<impl Responder> {
    let list = employees.list_all().await?;
    debug!(count = list.len(), "Listing employees");

    Ok(HttpResponse::Ok().json(list))
}

/// Employee entry form
#[utoipa::path(
    get,
    path = "/add_employee",
    responses(
        (status = 200, description = "HTML form for adding an employee", body = String, content_type = "text/html")
    ),
    tag = "Employee"
)]
pub async fn add_employee_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(ADD_EMPLOYEE_FORM)
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/add_employee",
    request_body(
        content = AddEmployeeForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 302, description = "Created, redirects to /employees"),
        (status = 400, description = "Missing field or invalid date", body = Object, example = json!({
            "Enter all details": "Please fill in all required fields."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    employees: web::Data<EmployeeService>,
    form: web::Form<AddEmployeeForm>,
) -> Result<HttpResponse, AppError> {
    employees
        .add_employee(
            form.name.as_deref().unwrap_or_default(),
            form.designation.as_deref().unwrap_or_default(),
            form.date_of_joining.as_deref().unwrap_or_default(),
            form.department.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(redirect_to_employees())
}
