use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    model::{
        attendance::{AttendanceRecord, AttendanceStatus},
        employee::{Employee, NewEmployee},
    },
};

/// Table-backed persistence for employees and their attendance.
///
/// Cloning is cheap and shares the underlying pool, so one `Store` is built at
/// startup and handed to every service.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> AppResult<Employee> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (name, designation, date_of_joining, department)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, designation, date_of_joining, department
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.designation)
        .bind(employee.date_of_joining)
        .bind(&employee.department)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(employee_id = created.id, department = %created.department, "Employee created");
        Ok(created)
    }

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, designation, date_of_joining, department FROM employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn find_employee(&self, employee_id: i64) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, designation, date_of_joining, department FROM employee WHERE id = ?",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Exact, case-sensitive match on the department label.
    pub async fn find_employees_by_department(&self, department: &str) -> AppResult<Vec<Employee>> {
        debug!(department, "Fetching employees by department");

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, designation, date_of_joining, department
            FROM employee
            WHERE department = ?
            ORDER BY id
            "#,
        )
        .bind(department)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Appends a record dated today (UTC).
    pub async fn append_attendance(
        &self,
        employee_id: i64,
        status: AttendanceStatus,
    ) -> AppResult<AttendanceRecord> {
        self.append_attendance_on(employee_id, status, Utc::now().date_naive())
            .await
    }

    pub async fn append_attendance_on(
        &self,
        employee_id: i64,
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> AppResult<AttendanceRecord> {
        let mut tx = self.pool.begin().await?;

        // the insert has to be the first statement: it takes the write lock
        // before any read, so concurrent appends wait on busy_timeout
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            SELECT ?, ?, ?
            WHERE EXISTS(SELECT 1 FROM employee WHERE id = ?)
            RETURNING id, employee_id, date, status
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .bind(status.as_ref())
        .bind(employee_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::EmployeeNotFound(employee_id)
            }
            _ => AppError::Database(e),
        })?
        .ok_or(AppError::EmployeeNotFound(employee_id))?;

        tx.commit().await?;

        info!(employee_id, status = %status, %date, "Attendance recorded");
        Ok(record)
    }

    /// Records in creation order.
    pub async fn list_attendance_for_employee(
        &self,
        employee_id: i64,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, employee_id, date, status
            FROM attendance
            WHERE employee_id = ?
            ORDER BY id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
