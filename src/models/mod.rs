pub mod id;
pub mod leave_application;
pub mod leave_balance;
pub mod user;
