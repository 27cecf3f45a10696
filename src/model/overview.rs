use serde::Serialize;
use utoipa::ToSchema;

use crate::model::employee::EmployeeWithAttendance;

/// Computed per-department summary, never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Overview {
    #[schema(example = "IT")]
    pub department: String,
    pub employees: Vec<EmployeeWithAttendance>,
    #[schema(example = 3)]
    pub present_count: u64,
    #[schema(example = 1)]
    pub absent_count: u64,
}
