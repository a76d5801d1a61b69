//! Storage gateway used by the services.
//!
//! Every operation touches a single record (or one bounded list read) and
//! reports failures as a [`StoreError`] kind so callers can pick a response
//! per kind instead of inspecting messages.

use async_trait::async_trait;

use crate::models::{
    id::RecordId,
    leave_application::{LeaveApplication, LeaveStatus, NewLeaveApplication},
    leave_balance::LeaveBalance,
    user::{NewUser, User},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. Carries the offending key.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Backend(#[from] sqlx::Error),

    /// A stored row could not be mapped back into a model.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Fails with [`StoreError::Duplicate`] when the email is already taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_id(&self, id: RecordId) -> StoreResult<Option<User>>;

    async fn insert_leave_application(
        &self,
        leave: NewLeaveApplication,
    ) -> StoreResult<LeaveApplication>;

    /// Insertion order, at most `limit` rows.
    async fn list_leave_applications(&self, limit: i64) -> StoreResult<Vec<LeaveApplication>>;

    /// Returns the number of matched applications (0 or 1).
    async fn update_leave_status(&self, id: RecordId, status: LeaveStatus) -> StoreResult<u64>;

    async fn find_leave_balance(&self, employee_id: RecordId) -> StoreResult<Option<LeaveBalance>>;
}
