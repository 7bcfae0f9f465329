//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request bodies for `POST /attendance` and
//! `POST /calculate`, and the pay period query accepted by the read
//! endpoints.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceEntry, Employee, PayPeriod, ShiftType, hhmm};
use crate::store::AttendanceLog;

/// Request body for the `POST /attendance` endpoint.
///
/// `id` may be omitted, in which case the log assigns the next free id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Optional entry id.
    #[serde(default)]
    pub id: Option<u32>,
    /// The employee the entry belongs to.
    pub employee_id: u32,
    /// The date the shift started on.
    pub date: NaiveDate,
    /// Clock-in time (`HH:MM`).
    #[serde(with = "hhmm")]
    pub clock_in: NaiveTime,
    /// Clock-out time (`HH:MM`).
    #[serde(with = "hhmm")]
    pub clock_out: NaiveTime,
    /// Precomputed overtime hours.
    #[serde(alias = "overtime")]
    pub overtime_hours: Decimal,
    /// Day or night classification.
    #[serde(alias = "type")]
    pub shift: ShiftType,
}

impl AttendanceRequest {
    /// Converts the request into an entry, taking the log's next id when no
    /// id was given.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`](crate::error::EngineError::InvalidAttendance)
    /// if no id was given and the log has run out of ids.
    pub fn into_entry(self, log: &AttendanceLog) -> EngineResult<AttendanceEntry> {
        let id = match self.id {
            Some(id) => id,
            None => log.next_id()?,
        };
        Ok(AttendanceEntry {
            id,
            employee_id: self.employee_id,
            date: self.date,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            overtime_hours: self.overtime_hours,
            shift: self.shift,
        })
    }
}

/// Request body for the `POST /calculate` endpoint.
///
/// Computes a payslip for an employee that need not be on the roster, from
/// the attendance supplied in the request. Rates default to the server's
/// loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee to calculate for.
    pub employee: Employee,
    /// Attendance entries to draw overtime from.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Optional rate override.
    #[serde(default)]
    pub rates: Option<RateConfig>,
    /// Optional period to narrow the attendance to.
    #[serde(default)]
    pub pay_period: Option<PayPeriod>,
}

impl CalculationRequest {
    /// Returns the requested pay period, if any.
    ///
    /// Returns a message describing the problem if the period ends before
    /// it starts.
    pub fn pay_period(&self) -> Result<Option<PayPeriod>, String> {
        match self.pay_period {
            Some(period) => {
                check_date_order(period.start_date, period.end_date)?;
                Ok(Some(period))
            }
            None => Ok(None),
        }
    }
}

/// Query parameters selecting a pay period.
///
/// Either both `start_date` and `end_date`, or `month` (`YYYY-MM`), or
/// nothing for all attendance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// Inclusive start of the period.
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the period.
    pub end_date: Option<NaiveDate>,
    /// A calendar month, as an alternative to explicit dates.
    pub month: Option<String>,
}

impl PeriodQuery {
    /// Resolves the query to a pay period.
    ///
    /// Returns a message describing the problem if the parameters are
    /// incomplete, conflicting or out of order.
    pub fn pay_period(&self) -> Result<Option<PayPeriod>, String> {
        match (self.start_date, self.end_date, self.month.as_deref()) {
            (None, None, None) => Ok(None),
            (None, None, Some(month)) => PayPeriod::from_month(month)
                .map(Some)
                .ok_or_else(|| format!("invalid month '{}', expected YYYY-MM", month)),
            (Some(start_date), Some(end_date), None) => {
                check_date_order(start_date, end_date)?;
                Ok(Some(PayPeriod::new(start_date, end_date)))
            }
            (_, _, Some(_)) => Err("month cannot be combined with start_date or end_date".to_string()),
            _ => Err("start_date and end_date must be given together".to_string()),
        }
    }
}

fn check_date_order(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), String> {
    if start_date > end_date {
        return Err(format!(
            "start_date {} is after end_date {}",
            start_date, end_date
        ));
    }
    Ok(())
}
