//! In-memory stores for reference and attendance data.
//!
//! The [`Roster`] resolves employee identifiers and the [`AttendanceLog`]
//! holds validated attendance entries. Both are owned by the caller and
//! handed to the calculation functions by reference.

mod attendance_log;
mod roster;

pub use attendance_log::{AttendanceLog, check_overtime};
pub use roster::Roster;
