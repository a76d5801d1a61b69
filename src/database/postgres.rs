use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::store::{LeaveStore, StoreError, StoreResult};
use crate::models::{
    id::RecordId,
    leave_application::{LeaveApplication, LeaveStatus, NewLeaveApplication},
    leave_balance::LeaveBalance,
    user::{NewUser, User},
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> StoreResult<Self> {
        Ok(User {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            role: row.role.parse().map_err(StoreError::Corrupt)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct LeaveApplicationRow {
    id: Uuid,
    employee_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeaveApplicationRow> for LeaveApplication {
    type Error = StoreError;

    fn try_from(row: LeaveApplicationRow) -> StoreResult<Self> {
        Ok(LeaveApplication {
            id: row.id.into(),
            employee_id: row.employee_id.into(),
            start_date: row.start_date,
            end_date: row.end_date,
            status: row.status.parse().map_err(StoreError::Corrupt)?,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct LeaveBalanceRow {
    employee_id: Uuid,
    available_leaves: i32,
    used_leaves: i32,
}

impl From<LeaveBalanceRow> for LeaveBalance {
    fn from(row: LeaveBalanceRow) -> Self {
        LeaveBalance {
            employee_id: row.employee_id.into(),
            available_leaves: row.available_leaves,
            used_leaves: row.used_leaves,
        }
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaveStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, role, password_hash, created_at
            FROM users
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let id = RecordId::new();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email, role, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, role, password_hash, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(user.email.clone())
            }
            other => StoreError::Backend(other),
        })?;

        User::try_from(row)
    }

    async fn find_user_by_id(&self, id: RecordId) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, role, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn insert_leave_application(
        &self,
        leave: NewLeaveApplication,
    ) -> StoreResult<LeaveApplication> {
        let id = RecordId::new();
        let row = sqlx::query_as::<_, LeaveApplicationRow>(
            r#"
            INSERT INTO leave_applications (id, employee_id, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, employee_id, start_date, end_date, status, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(leave.employee_id.as_uuid())
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(leave.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        LeaveApplication::try_from(row)
    }

    async fn list_leave_applications(&self, limit: i64) -> StoreResult<Vec<LeaveApplication>> {
        let rows = sqlx::query_as::<_, LeaveApplicationRow>(
            r#"
            SELECT id, employee_id, start_date, end_date, status, created_at
            FROM leave_applications
            ORDER BY seq ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LeaveApplication::try_from).collect()
    }

    async fn update_leave_status(&self, id: RecordId, status: LeaveStatus) -> StoreResult<u64> {
        // Postgres reports matched rows, so re-applying the current status still counts.
        let res = sqlx::query("UPDATE leave_applications SET status = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }

    async fn find_leave_balance(&self, employee_id: RecordId) -> StoreResult<Option<LeaveBalance>> {
        let row = sqlx::query_as::<_, LeaveBalanceRow>(
            r#"
            SELECT employee_id, available_leaves, used_leaves
            FROM leave_balances
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LeaveBalance::from))
    }
}
