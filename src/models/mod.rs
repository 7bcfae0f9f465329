//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod payroll_result;
mod payslip;

pub use attendance::{AttendanceEntry, ShiftType};
pub(crate) use attendance::hhmm;
pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payroll_result::{AuditStep, AuditTrace, AuditWarning, PayrollResult};
pub use payslip::{DashboardSummary, Payslip};
