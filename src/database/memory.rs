//! In-process [`LeaveStore`] backed by a mutex-guarded set of vectors.
//!
//! Selected with `STORAGE_BACKEND=memory`; also the store behind the HTTP
//! tests. Contents vanish with the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::database::store::{LeaveStore, StoreError, StoreResult};
use crate::models::{
    id::RecordId,
    leave_application::{LeaveApplication, LeaveStatus, NewLeaveApplication},
    leave_balance::LeaveBalance,
    user::{NewUser, User},
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    leave_applications: Vec<LeaveApplication>,
    leave_balances: HashMap<RecordId, LeaveBalance>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balances have no write endpoint; they are loaded out-of-band.
    pub fn seed_balance(&self, balance: LeaveBalance) {
        self.lock()
            .leave_balances
            .insert(balance.employee_id, balance);
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut guard = self.lock();
        if guard
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::Duplicate(user.email));
        }

        let stored = User {
            id: RecordId::new(),
            name: user.name,
            email: user.email,
            role: user.role,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        guard.users.push(stored.clone());
        Ok(stored)
    }

    async fn find_user_by_id(&self, id: RecordId) -> StoreResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert_leave_application(
        &self,
        leave: NewLeaveApplication,
    ) -> StoreResult<LeaveApplication> {
        let stored = LeaveApplication {
            id: RecordId::new(),
            employee_id: leave.employee_id,
            start_date: leave.start_date,
            end_date: leave.end_date,
            status: leave.status,
            created_at: Utc::now(),
        };
        self.lock().leave_applications.push(stored.clone());
        Ok(stored)
    }

    async fn list_leave_applications(&self, limit: i64) -> StoreResult<Vec<LeaveApplication>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .lock()
            .leave_applications
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_leave_status(&self, id: RecordId, status: LeaveStatus) -> StoreResult<u64> {
        let mut guard = self.lock();
        match guard.leave_applications.iter_mut().find(|l| l.id == id) {
            Some(leave) => {
                leave.status = status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_leave_balance(&self, employee_id: RecordId) -> StoreResult<Option<LeaveBalance>> {
        Ok(self.lock().leave_balances.get(&employee_id).cloned())
    }
}
