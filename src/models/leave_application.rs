use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::id::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            other => Err(format!(
                "Invalid status '{}'. Allowed: pending, approved, rejected",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveApplication {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaveApplication {
    pub employee_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!("Approved".parse::<LeaveStatus>(), Ok(LeaveStatus::Approved));
        assert_eq!(" rejected ".parse::<LeaveStatus>(), Ok(LeaveStatus::Rejected));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "cancelled".parse::<LeaveStatus>().unwrap_err();
        assert!(err.contains("cancelled"));
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
    }
}
