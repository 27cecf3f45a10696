use crate::api::{attendance::StatusForm, employee::AddEmployeeForm};
use crate::model::{
    attendance::{AttendanceRecord, AttendanceStatus},
    employee::{Employee, EmployeeWithAttendance},
    overview::Overview,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "0.1.0",
        description = r#"
## Attendance Tracker

Records employees, lets an operator mark daily attendance per employee and
summarises present/absent counts per department.

- **Employees**: add an employee, list all employees
- **Attendance**: append a `present` or `absent` record for today, view an employee's history
- **Overview**: per-department totals joined with every employee's records

Attendance is append-only: marking twice on the same day keeps both records.
"#,
    ),
    paths(
        crate::api::welcome::welcome,

        crate::api::employee::list_employees,
        crate::api::employee::add_employee_form,
        crate::api::employee::add_employee,

        crate::api::attendance::update_attendance,
        crate::api::attendance::list_attendance,

        crate::api::overview::overview
    ),
    components(
        schemas(
            Employee,
            EmployeeWithAttendance,
            AttendanceRecord,
            AttendanceStatus,
            Overview,
            AddEmployeeForm,
            StatusForm
        )
    ),
    tags(
        (name = "Welcome", description = "Landing endpoint"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Overview", description = "Department attendance summaries"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/",
            "/employees",
            "/employees/{employee_id}/attendance",
            "/add_employee",
            "/update_attendance/{employee_id}",
            "/overview/{department}",
        ] {
            assert!(paths.iter().any(|p| *p == expected), "missing {expected}");
        }
    }
}
