//! Shift classification policy.
//!
//! Attendance entries carry their DAY/NIGHT label as supplied data and the
//! calculators never re-derive it. This module exposes the rule the label is
//! expected to follow so callers can flag entries that disagree with it:
//!
//! - Night: clock-in at or after 18:00 and clock-out at or before 09:00 the
//!   following day
//! - Day: clock-in between 06:00 and 10:00 and clock-out between 17:00 and
//!   22:00 (both bands inclusive)

use chrono::{NaiveTime, Timelike};

use crate::models::{AttendanceEntry, AuditWarning, ShiftType};

const HOUR: u32 = 3600;

const NIGHT_CLOCK_IN_FROM: u32 = 18 * HOUR;
const NIGHT_CLOCK_OUT_UNTIL: u32 = 9 * HOUR;

const DAY_CLOCK_IN_FROM: u32 = 6 * HOUR;
const DAY_CLOCK_IN_UNTIL: u32 = 10 * HOUR;
const DAY_CLOCK_OUT_FROM: u32 = 17 * HOUR;
const DAY_CLOCK_OUT_UNTIL: u32 = 22 * HOUR;

/// Warning code reported when a supplied label disagrees with the rule.
pub const SHIFT_MISMATCH_WARNING: &str = "SHIFT_CLASSIFICATION_MISMATCH";

/// Classifies a shift from its clock times.
///
/// Returns `None` when the times fall outside both bands.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_shift;
/// use payroll_engine::models::ShiftType;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(classify_shift(t(8, 30), t(19, 0)), Some(ShiftType::Day));
/// assert_eq!(classify_shift(t(19, 0), t(8, 30)), Some(ShiftType::Night));
/// assert_eq!(classify_shift(t(12, 0), t(16, 0)), None);
/// ```
pub fn classify_shift(clock_in: NaiveTime, clock_out: NaiveTime) -> Option<ShiftType> {
    let clock_in = clock_in.num_seconds_from_midnight();
    let clock_out = clock_out.num_seconds_from_midnight();

    if clock_in >= NIGHT_CLOCK_IN_FROM && clock_out <= NIGHT_CLOCK_OUT_UNTIL {
        Some(ShiftType::Night)
    } else if (DAY_CLOCK_IN_FROM..=DAY_CLOCK_IN_UNTIL).contains(&clock_in)
        && (DAY_CLOCK_OUT_FROM..=DAY_CLOCK_OUT_UNTIL).contains(&clock_out)
    {
        Some(ShiftType::Day)
    } else {
        None
    }
}

/// Compares an entry's supplied label with [`classify_shift`].
///
/// Returns a warning when the clock times clearly match the other shift.
/// Entries whose times match neither band are not flagged. A clock-out on
/// the following day is marked `(+1 day)` in the message.
pub fn check_shift_classification(entry: &AttendanceEntry) -> Option<AuditWarning> {
    let expected = classify_shift(entry.clock_in, entry.clock_out)?;
    if expected == entry.shift {
        return None;
    }

    let next_day = if entry.crosses_midnight() { " (+1 day)" } else { "" };

    Some(AuditWarning {
        code: SHIFT_MISMATCH_WARNING.to_string(),
        message: format!(
            "Attendance entry {} is labelled {:?} but {}-{}{} matches a {:?} shift",
            entry.id,
            entry.shift,
            entry.clock_in.format("%H:%M"),
            entry.clock_out.format("%H:%M"),
            next_day,
            expected
        ),
        severity: "low".to_string(),
    })
}
