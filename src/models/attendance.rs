//! Attendance entry model and related types.
//!
//! This module defines the [`AttendanceEntry`] struct and [`ShiftType`] enum
//! for representing clock-in/clock-out records in the payroll system.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The shift classification attached to an attendance entry.
///
/// Classification is supplied with the entry; it is never re-derived from
/// the clock times by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// A day shift. Legacy records label these `normal`.
    #[serde(alias = "normal")]
    Day,
    /// A night shift, usually ending the following morning.
    Night,
}

/// Represents a single attendance record for one employee on one date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceEntry, ShiftType};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = AttendanceEntry {
///     id: 1,
///     employee_id: 1,
///     date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     clock_out: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///     overtime_hours: Decimal::new(15, 1),
///     shift: ShiftType::Day,
/// };
/// assert!(!entry.crosses_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Unique identifier for the entry.
    pub id: u32,
    /// The employee this entry belongs to.
    pub employee_id: u32,
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// Clock-in time on `date`.
    #[serde(with = "hhmm")]
    pub clock_in: NaiveTime,
    /// Clock-out time; earlier than `clock_in` when the shift ends the next day.
    #[serde(with = "hhmm")]
    pub clock_out: NaiveTime,
    /// Precomputed overtime hours (non-negative).
    #[serde(alias = "overtime")]
    pub overtime_hours: Decimal,
    /// Day or night classification.
    #[serde(alias = "type")]
    pub shift: ShiftType,
}

impl AttendanceEntry {
    /// Returns true if the clock-out time falls on the day after `date`.
    pub fn crosses_midnight(&self) -> bool {
        self.clock_out <= self.clock_in
    }
}

/// Serde helpers for `HH:MM` clock times.
///
/// Serializes as `HH:MM`; deserializes either `HH:MM` or `HH:MM:SS`.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid clock time '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn create_test_entry(clock_in: NaiveTime, clock_out: NaiveTime) -> AttendanceEntry {
        AttendanceEntry {
            id: 1,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            clock_in,
            clock_out,
            overtime_hours: Decimal::from_str("1.5").unwrap(),
            shift: ShiftType::Day,
        }
    }

    #[test]
    fn test_deserialize_day_entry() {
        let json = r#"{
            "id": 1,
            "employee_id": 1,
            "date": "2026-02-12",
            "clock_in": "08:00",
            "clock_out": "19:00",
            "overtime_hours": "1.5",
            "shift": "day"
        }"#;

        let entry: AttendanceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.clock_in, make_time(8, 0));
        assert_eq!(entry.clock_out, make_time(19, 0));
        assert_eq!(entry.overtime_hours, Decimal::new(15, 1));
        assert_eq!(entry.shift, ShiftType::Day);
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let json = r#"{
            "id": 11,
            "employee_id": 11,
            "date": "2026-02-12",
            "clock_in": "19:00",
            "clock_out": "08:30",
            "overtime": "4.5",
            "type": "night"
        }"#;

        let entry: AttendanceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.overtime_hours, Decimal::new(45, 1));
        assert_eq!(entry.shift, ShiftType::Night);
    }

    #[test]
    fn test_normal_is_accepted_as_day() {
        let shift: ShiftType = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(shift, ShiftType::Day);
    }

    #[test]
    fn test_shift_type_serialization() {
        assert_eq!(serde_json::to_string(&ShiftType::Day).unwrap(), "\"day\"");
        assert_eq!(serde_json::to_string(&ShiftType::Night).unwrap(), "\"night\"");
    }

    #[test]
    fn test_clock_times_accept_seconds() {
        let json = r#"{
            "id": 1,
            "employee_id": 1,
            "date": "2026-02-12",
            "clock_in": "08:30:00",
            "clock_out": "19:00:00",
            "overtime_hours": "1.5",
            "shift": "day"
        }"#;

        let entry: AttendanceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.clock_in, make_time(8, 30));
    }

    #[test]
    fn test_invalid_clock_time_is_rejected() {
        let json = r#"{
            "id": 1,
            "employee_id": 1,
            "date": "2026-02-12",
            "clock_in": "25:00",
            "clock_out": "19:00",
            "overtime_hours": "1.5",
            "shift": "day"
        }"#;

        let result: Result<AttendanceEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_clock_times_serialize_as_hhmm() {
        let entry = create_test_entry(make_time(8, 30), make_time(19, 0));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["clock_in"], "08:30");
        assert_eq!(json["clock_out"], "19:00");
        assert_eq!(json["shift"], "day");
    }

    #[test]
    fn test_crosses_midnight() {
        assert!(!create_test_entry(make_time(8, 0), make_time(19, 0)).crosses_midnight());
        assert!(create_test_entry(make_time(19, 0), make_time(8, 30)).crosses_midnight());
    }
}
