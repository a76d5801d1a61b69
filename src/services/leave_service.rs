use std::sync::Arc;

use crate::database::store::LeaveStore;
use crate::dto::leave_dto::{ApplyLeavePayload, LeaveApplicationResponse, LeaveBalanceResponse};
use crate::error::{Error, Result};
use crate::models::{
    id::RecordId,
    leave_application::{LeaveStatus, NewLeaveApplication},
};
use crate::utils::validation::parse_date_range;

/// Upper bound on rows returned by a single listing.
pub const LIST_LIMIT: i64 = 100;

#[derive(Clone)]
pub struct LeaveService {
    store: Arc<dyn LeaveStore>,
}

impl LeaveService {
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }

    pub async fn apply(&self, payload: ApplyLeavePayload) -> Result<LeaveApplicationResponse> {
        let employee_id = RecordId::parse(&payload.employee_id)?;
        let (start_date, end_date) = parse_date_range(&payload.start_date, &payload.end_date)?;
        let status = match payload.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => LeaveStatus::default(),
        };

        let leave = self
            .store
            .insert_leave_application(NewLeaveApplication {
                employee_id,
                start_date,
                end_date,
                status,
            })
            .await?;

        tracing::info!(
            leave_id = %leave.id,
            employee_id = %leave.employee_id,
            status = %leave.status,
            "Leave application recorded"
        );
        Ok(LeaveApplicationResponse::from(leave))
    }

    pub async fn list(&self) -> Result<Vec<LeaveApplicationResponse>> {
        let leaves = self.store.list_leave_applications(LIST_LIMIT).await?;
        Ok(leaves.into_iter().map(Into::into).collect())
    }

    pub async fn update_status(&self, raw_id: &str, raw_status: Option<&str>) -> Result<()> {
        let id = RecordId::parse(raw_id)?;
        let raw_status =
            raw_status.ok_or_else(|| Error::BadRequest("status is required".to_string()))?;
        let status = parse_status(raw_status)?;

        let matched = self.store.update_leave_status(id, status).await?;
        if matched == 0 {
            return Err(Error::NotFound("Leave application not found".to_string()));
        }

        tracing::info!(leave_id = %id, status = %status, "Leave status updated");
        Ok(())
    }

    pub async fn balance(&self, raw_employee_id: &str) -> Result<LeaveBalanceResponse> {
        let employee_id = RecordId::parse(raw_employee_id)?;
        let balance = self
            .store
            .find_leave_balance(employee_id)
            .await?
            .ok_or_else(|| Error::NotFound("Leave balance not found".to_string()))?;
        Ok(LeaveBalanceResponse::from(balance))
    }
}

fn parse_status(raw: &str) -> Result<LeaveStatus> {
    raw.parse().map_err(Error::BadRequest)
}
