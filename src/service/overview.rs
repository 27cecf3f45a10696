use tracing::{debug, instrument};

use crate::{
    error::AppResult,
    model::{
        attendance::{AttendanceRecord, AttendanceStatus},
        employee::EmployeeWithAttendance,
        overview::Overview,
    },
    service::{AttendanceService, EmployeeService},
};

/// Builds the per-department present/absent summary.
#[derive(Clone)]
pub struct OverviewAggregator {
    employees: EmployeeService,
    attendance: AttendanceService,
}

impl OverviewAggregator {
    pub fn new(employees: EmployeeService, attendance: AttendanceService) -> Self {
        Self {
            employees,
            attendance,
        }
    }

    /// An unknown department yields an empty overview, not an error.
    #[instrument(skip(self), err(Display))]
    pub async fn build_overview(&self, department: &str) -> AppResult<Overview> {
        let employees = self.employees.find_by_department(department).await?;

        let mut joined = Vec::with_capacity(employees.len());
        for employee in employees {
            let attendance = self.attendance.list_for_employee(employee.id).await?;
            joined.push(EmployeeWithAttendance {
                employee,
                attendance,
            });
        }

        let (present_count, absent_count) = tally(joined.iter().flat_map(|e| &e.attendance));
        debug!(
            employees = joined.len(),
            present_count, absent_count, "Overview built"
        );

        Ok(Overview {
            department: department.to_string(),
            employees: joined,
            present_count,
            absent_count,
        })
    }
}

/// Unrecognised status text counts toward neither total.
fn tally<'a>(records: impl Iterator<Item = &'a AttendanceRecord>) -> (u64, u64) {
    records.fold((0, 0), |(present, absent), record| {
        match record.parsed_status() {
            Some(AttendanceStatus::Present) => (present + 1, absent),
            Some(AttendanceStatus::Absent) => (present, absent + 1),
            None => (present, absent),
        }
    })
}
