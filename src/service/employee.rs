use chrono::NaiveDate;
use tracing::instrument;

use crate::{
    error::{AppResult, ValidationError},
    model::employee::{Employee, NewEmployee},
    store::Store,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct EmployeeService {
    store: Store,
}

impl EmployeeService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Validates the raw form values and persists a new employee.
    ///
    /// Name, designation and date of joining are required; department may be
    /// empty. The date must be `YYYY-MM-DD`.
    #[instrument(skip(self), err(Display))]
    pub async fn add_employee(
        &self,
        name: &str,
        designation: &str,
        date_of_joining: &str,
        department: &str,
    ) -> AppResult<Employee> {
        let employee = validate(name, designation, date_of_joining, department)?;
        self.store.create_employee(&employee).await
    }

    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        self.store.list_employees().await
    }

    pub async fn find(&self, employee_id: i64) -> AppResult<Option<Employee>> {
        self.store.find_employee(employee_id).await
    }

    pub async fn find_by_department(&self, department: &str) -> AppResult<Vec<Employee>> {
        self.store.find_employees_by_department(department).await
    }
}

fn validate(
    name: &str,
    designation: &str,
    date_of_joining: &str,
    department: &str,
) -> Result<NewEmployee, ValidationError> {
    let name = required("name", name)?;
    let designation = required("designation", designation)?;
    let date_text = required("date_of_joining", date_of_joining)?;

    let date_of_joining = parse_date(date_text)?;

    Ok(NewEmployee {
        name: name.to_string(),
        designation: designation.to_string(),
        date_of_joining,
        department: department.trim().to_string(),
    })
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

// chrono accepts unpadded fields for %m/%d, the stored form is always padded
fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(text.to_string());

    let well_formed = text.len() == 10
        && text
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::store::tests::memory_store;

    #[test]
    fn date_must_be_strict_iso() {
        assert_eq!(
            parse_date("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        for bad in ["2023-02-29", "2024-2-9", "29/02/2024", "2024-13-01", "soon", "2024-01-01x"] {
            assert_eq!(parse_date(bad), Err(ValidationError::InvalidDate(bad.to_string())));
        }
    }

    #[test]
    fn missing_fields_are_reported_before_the_date() {
        assert_eq!(
            validate("", "Engineer", "not a date", "IT"),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            validate("Ada", "  ", "2024-01-01", "IT"),
            Err(ValidationError::MissingField("designation"))
        );
        assert_eq!(
            validate("Ada", "Engineer", "", "IT"),
            Err(ValidationError::MissingField("date_of_joining"))
        );
    }

    #[test]
    fn department_may_be_empty() {
        let employee = validate("Ada", "Engineer", "2024-01-01", "").unwrap();
        assert_eq!(employee.department, "");
    }

    #[actix_web::test]
    async fn add_employee_persists_and_lists() {
        let service = EmployeeService::new(memory_store().await);

        let ada = service
            .add_employee("Ada", "Engineer", "2024-01-01", "IT")
            .await
            .unwrap();
        let bob = service
            .add_employee("Bob", "Analyst", "2023-06-30", "Finance")
            .await
            .unwrap();

        assert_ne!(ada.id, bob.id);
        let all = service.list_all().await.unwrap();
        assert!(all.contains(&ada));
        assert!(all.contains(&bob));
    }

    #[actix_web::test]
    async fn invalid_input_does_not_persist() {
        let service = EmployeeService::new(memory_store().await);
        service
            .add_employee("Ada", "Engineer", "2024-01-01", "IT")
            .await
            .unwrap();

        let cases = [
            ("", "Engineer", "2024-01-01"),
            ("Bob", "", "2024-01-01"),
            ("Bob", "Engineer", "01-01-2024"),
        ];
        for (name, designation, date) in cases {
            let err = service
                .add_employee(name, designation, date, "IT")
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }
}
