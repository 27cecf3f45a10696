use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One appended attendance fact. Rows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-10-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// Kept as stored text; rows written before status was typed may hold anything.
    #[schema(example = "present")]
    pub status: String,
}

impl AttendanceRecord {
    /// `None` when the stored text is not a recognised status.
    pub fn parsed_status(&self) -> Option<AttendanceStatus> {
        self.status.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_exact() {
        assert_eq!("present".parse(), Ok(AttendanceStatus::Present));
        assert_eq!("absent".parse(), Ok(AttendanceStatus::Absent));
        assert!("Present".parse::<AttendanceStatus>().is_err());
        assert!("late".parse::<AttendanceStatus>().is_err());
        assert_eq!(AttendanceStatus::Absent.as_ref(), "absent");
    }
}
