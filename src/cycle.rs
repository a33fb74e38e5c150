// src/cycle.rs
//! The manual status cycle.
//!
//! Models a student revising their own record for one node. The cycle is
//! independent of dependency state; dependency effects are applied
//! afterwards by the propagation pass.

use crate::types::Status;

/// Next status under a direct click. Total and deterministic: every status
/// has a defined successor, with `Locked` mapping to itself (locked state
/// is derived, not authored, so it cannot be manually advanced).
#[must_use]
pub fn next_status(current: Status) -> Status {
    match current {
        Status::Done => Status::Failed,
        Status::Failed => Status::Enrolled,
        Status::Enrolled | Status::Available => Status::Done,
        Status::Locked => Status::Locked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_table_complete() {
        let cases = vec![
            (Status::Done, Status::Failed, "done advances to failed"),
            (Status::Failed, Status::Enrolled, "failed advances to enrolled"),
            (Status::Enrolled, Status::Done, "enrolled advances to done"),
            (Status::Available, Status::Done, "available advances to done"),
            (Status::Locked, Status::Locked, "locked is a no-op"),
        ];

        for (from, to, desc) in cases {
            assert_eq!(next_status(from), to, "Failed: {desc}");
        }
    }

    #[test]
    fn test_cycle_returns_to_done_in_three_clicks() {
        let mut status = Status::Done;
        for _ in 0..3 {
            status = next_status(status);
        }
        assert_eq!(status, Status::Done);
    }
}
