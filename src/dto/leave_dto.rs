use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{
    leave_application::{LeaveApplication, LeaveStatus},
    leave_balance::LeaveBalance,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplyLeavePayload {
    #[schema(example = "6f9619ff-8b86-d011-b42d-00c04fc964ff")]
    pub employee_id: String,
    #[schema(example = "2024-01-01", format = "date")]
    pub start_date: String,
    #[schema(example = "2024-01-05", format = "date")]
    pub end_date: String,
    /// One of `pending`, `approved`, `rejected`. Defaults to `pending`.
    #[serde(default)]
    #[schema(example = "pending")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveApplicationResponse {
    pub id: String,
    pub employee_id: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "pending", value_type = String)]
    pub status: LeaveStatus,
}

impl From<LeaveApplication> for LeaveApplicationResponse {
    fn from(leave: LeaveApplication) -> Self {
        Self {
            id: leave.id.to_string(),
            employee_id: leave.employee_id.to_string(),
            start_date: leave.start_date,
            end_date: leave.end_date,
            status: leave.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct StatusUpdateQuery {
    /// New status: `pending`, `approved` or `rejected`.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StatusUpdateBody {
    #[schema(example = "approved")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveBalanceResponse {
    pub employee_id: String,
    pub available_leaves: i32,
    pub used_leaves: i32,
}

impl From<LeaveBalance> for LeaveBalanceResponse {
    fn from(balance: LeaveBalance) -> Self {
        Self {
            employee_id: balance.employee_id.to_string(),
            available_leaves: balance.available_leaves,
            used_leaves: balance.used_leaves,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
