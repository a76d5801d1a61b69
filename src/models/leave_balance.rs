use crate::models::id::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveBalance {
    pub employee_id: RecordId,
    pub available_leaves: i32,
    pub used_leaves: i32,
}
