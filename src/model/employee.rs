use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::AttendanceRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "designation": "Software Engineer",
        "date_of_joining": "2024-01-01",
        "department": "IT"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Software Engineer")]
    pub designation: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date_of_joining: NaiveDate,

    #[schema(example = "IT")]
    pub department: String,
}

/// Validated fields for an employee that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
    pub department: String,
}

/// An employee joined with every attendance record it owns, oldest first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeWithAttendance {
    pub employee: Employee,
    pub attendance: Vec<AttendanceRecord>,
}
