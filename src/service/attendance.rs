use tracing::instrument;

use crate::{
    error::AppResult,
    model::attendance::{AttendanceRecord, AttendanceStatus},
    store::Store,
};

#[derive(Clone)]
pub struct AttendanceService {
    store: Store,
}

impl AttendanceService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Appends today's status for the employee. Never overwrites earlier records.
    #[instrument(skip(self), err(Display))]
    pub async fn mark_attendance(
        &self,
        employee_id: i64,
        status: AttendanceStatus,
    ) -> AppResult<AttendanceRecord> {
        self.store.append_attendance(employee_id, status).await
    }

    pub async fn list_for_employee(&self, employee_id: i64) -> AppResult<Vec<AttendanceRecord>> {
        self.store.list_attendance_for_employee(employee_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::store::tests::{memory_store, new_employee};

    #[actix_web::test]
    async fn same_day_updates_append_two_rows() {
        let store = memory_store().await;
        let e = store.create_employee(&new_employee("Ada", "IT")).await.unwrap();
        let service = AttendanceService::new(store);

        let present = service
            .mark_attendance(e.id, AttendanceStatus::Present)
            .await
            .unwrap();
        let absent = service
            .mark_attendance(e.id, AttendanceStatus::Absent)
            .await
            .unwrap();

        assert_ne!(present.id, absent.id);
        assert_eq!(present.status, "present");
        assert_eq!(absent.status, "absent");
        assert_eq!(service.list_for_employee(e.id).await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn unknown_employee_is_not_found() {
        let service = AttendanceService::new(memory_store().await);

        let err = service
            .mark_attendance(7, AttendanceStatus::Absent)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmployeeNotFound(7)));
        assert!(service.list_for_employee(7).await.unwrap().is_empty());
    }
}
