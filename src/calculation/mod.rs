//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure functions that derive payslips and
//! dashboard statistics from the roster, attendance entries and rate
//! configuration. None of them hold state; they borrow what the caller
//! supplies and are safe to call concurrently.

use crate::error::EngineError;

mod payslip;
mod payslip_audit;
mod rounding;
mod shift_classification;
mod summary;

pub use payslip::{compute_payroll, compute_payslip, total_overtime_hours};
pub use payslip_audit::{calculate_payroll_result, payslip_audit_steps};
pub use rounding::{CURRENCY_ROUNDING, round_currency};
pub use shift_classification::{
    SHIFT_MISMATCH_WARNING, check_shift_classification, classify_shift,
};
pub use summary::compute_summary;

/// Error for an amount that left the decimal range.
fn overflow(quantity: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} overflowed", quantity),
    }
}
