//! Attendance log.
//!
//! This module provides the [`AttendanceLog`] type, the ordered sequence of
//! attendance entries recorded for rostered employees.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, PayPeriod};

use super::Roster;

/// An append-only, ordered log of attendance entries.
///
/// Every entry in the log references a rostered employee, has a unique id and
/// carries non-negative overtime. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct AttendanceLog {
    entries: Vec<AttendanceEntry>,
    ids: HashSet<u32>,
}

impl AttendanceLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from entries, validating each against the roster.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that [`record`](Self::record) would reject.
    pub fn from_entries(entries: Vec<AttendanceEntry>, roster: &Roster) -> EngineResult<Self> {
        let mut log = Self::new();
        for entry in entries {
            log.record(entry, roster)?;
        }
        Ok(log)
    }

    /// Appends an entry to the log.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownEmployee`] if the entry's employee is not rostered
    /// - [`EngineError::InvalidAttendance`] if the id is already used or the
    ///   overtime is negative
    pub fn record(&mut self, entry: AttendanceEntry, roster: &Roster) -> EngineResult<&AttendanceEntry> {
        roster.get(entry.employee_id)?;
        check_overtime(&entry)?;

        if !self.ids.insert(entry.id) {
            return Err(EngineError::InvalidAttendance {
                entry_id: entry.id,
                message: "duplicate attendance entry id".to_string(),
            });
        }

        self.entries.push(entry);
        let position = self.entries.len() - 1;
        Ok(&self.entries[position])
    }

    /// Returns all entries in recorded order.
    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }

    /// Returns the entries recorded for one employee, in recorded order.
    pub fn for_employee(&self, employee_id: u32) -> impl Iterator<Item = &AttendanceEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.employee_id == employee_id)
    }

    /// Returns copies of the entries dated within the pay period.
    pub fn in_period(&self, pay_period: &PayPeriod) -> Vec<AttendanceEntry> {
        self.entries
            .iter()
            .filter(|entry| pay_period.contains_date(entry.date))
            .cloned()
            .collect()
    }

    /// Returns an id one greater than the largest id recorded so far.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`] if the largest id is
    /// already `u32::MAX`.
    pub fn next_id(&self) -> EngineResult<u32> {
        match self.ids.iter().max() {
            None => Ok(1),
            Some(&max) => max.checked_add(1).ok_or(EngineError::InvalidAttendance {
                entry_id: max,
                message: format!("no attendance ids left after {}", max),
            }),
        }
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rejects an entry carrying negative overtime.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAttendance`] naming the entry.
pub fn check_overtime(entry: &AttendanceEntry) -> EngineResult<()> {
    if entry.overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidAttendance {
            entry_id: entry.id,
            message: format!(
                "overtime hours must not be negative, got {}",
                entry.overtime_hours
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, ShiftType};
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_roster() -> Roster {
        Roster::new(vec![
            Employee::new(1, "Lee Chae-hyun", "Youngjin Pack"),
            Employee::new(2, "Han Seong-ung", "Youngjin Pack"),
        ])
        .unwrap()
    }

    fn create_entry(id: u32, employee_id: u32, date: &str, overtime: &str) -> AttendanceEntry {
        AttendanceEntry {
            id,
            employee_id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            clock_in: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            clock_out: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            overtime_hours: dec(overtime),
            shift: ShiftType::Day,
        }
    }

    #[test]
    fn test_record_valid_entry() {
        let roster = create_test_roster();
        let mut log = AttendanceLog::new();

        let recorded = log
            .record(create_entry(1, 1, "2026-02-12", "1.5"), &roster)
            .unwrap();
        assert_eq!(recorded.id, 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_record_unknown_employee_rejected() {
        let roster = create_test_roster();
        let mut log = AttendanceLog::new();

        let result = log.record(create_entry(1, 99, "2026-02-12", "1.5"), &roster);
        match result {
            Err(EngineError::UnknownEmployee { id }) => assert_eq!(id, 99),
            other => panic!("Expected UnknownEmployee, got {:?}", other),
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_record_negative_overtime_rejected() {
        let roster = create_test_roster();
        let mut log = AttendanceLog::new();

        let result = log.record(create_entry(5, 1, "2026-02-12", "-0.5"), &roster);
        match result {
            Err(EngineError::InvalidAttendance { entry_id, message }) => {
                assert_eq!(entry_id, 5);
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidAttendance, got {:?}", other),
        }
    }

    #[test]
    fn test_record_duplicate_id_rejected() {
        let roster = create_test_roster();
        let mut log = AttendanceLog::new();
        log.record(create_entry(1, 1, "2026-02-12", "1.5"), &roster)
            .unwrap();

        let result = log.record(create_entry(1, 2, "2026-02-13", "0"), &roster);
        assert!(matches!(
            result,
            Err(EngineError::InvalidAttendance { entry_id: 1, .. })
        ));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_for_employee_filters_in_order() {
        let roster = create_test_roster();
        let log = AttendanceLog::from_entries(
            vec![
                create_entry(1, 1, "2026-02-12", "1.5"),
                create_entry(2, 2, "2026-02-12", "3"),
                create_entry(3, 1, "2026-02-13", "0.5"),
            ],
            &roster,
        )
        .unwrap();

        let ids: Vec<u32> = log.for_employee(1).map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_in_period_selects_dates() {
        let roster = create_test_roster();
        let log = AttendanceLog::from_entries(
            vec![
                create_entry(1, 1, "2026-01-31", "1"),
                create_entry(2, 1, "2026-02-01", "2"),
                create_entry(3, 2, "2026-02-28", "3"),
                create_entry(4, 2, "2026-03-01", "4"),
            ],
            &roster,
        )
        .unwrap();

        let february = PayPeriod::from_month("2026-02").unwrap();
        let ids: Vec<u32> = log.in_period(&february).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_next_id() {
        let roster = create_test_roster();
        let mut log = AttendanceLog::new();
        assert_eq!(log.next_id().unwrap(), 1);

        log.record(create_entry(7, 1, "2026-02-12", "0"), &roster)
            .unwrap();
        log.record(create_entry(3, 2, "2026-02-12", "0"), &roster)
            .unwrap();
        assert_eq!(log.next_id().unwrap(), 8);
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        let roster = create_test_roster();
        let mut log = AttendanceLog::new();
        log.record(create_entry(u32::MAX, 1, "2026-02-12", "0"), &roster)
            .unwrap();

        let result = log.next_id();
        assert!(matches!(
            result,
            Err(EngineError::InvalidAttendance { entry_id, .. }) if entry_id == u32::MAX
        ));

        // Explicit ids below the maximum can still be recorded
        log.record(create_entry(5, 2, "2026-02-12", "0"), &roster)
            .unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_from_entries_stops_at_first_invalid() {
        let roster = create_test_roster();
        let result = AttendanceLog::from_entries(
            vec![
                create_entry(1, 1, "2026-02-12", "1.5"),
                create_entry(2, 3, "2026-02-12", "1.5"),
            ],
            &roster,
        );
        assert!(matches!(result, Err(EngineError::UnknownEmployee { id: 3 })));
    }
}
