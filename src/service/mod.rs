pub mod attendance;
pub mod employee;
pub mod overview;

pub use attendance::AttendanceService;
pub use employee::EmployeeService;
pub use overview::OverviewAggregator;

use crate::store::Store;

/// Every service wired against one shared store.
#[derive(Clone)]
pub struct Services {
    pub employees: EmployeeService,
    pub attendance: AttendanceService,
    pub overview: OverviewAggregator,
}

impl Services {
    pub fn new(store: Store) -> Self {
        let employees = EmployeeService::new(store.clone());
        let attendance = AttendanceService::new(store);
        let overview = OverviewAggregator::new(employees.clone(), attendance.clone());

        Self {
            employees,
            attendance,
            overview,
        }
    }
}
