//! Payslip calculation.
//!
//! This module derives a [`Payslip`] for one employee from the attendance
//! entries and a [`RateConfig`]:
//!
//! ```text
//! overtime pay = Σ overtime hours × overtime hourly rate
//! gross        = base salary + overtime pay
//! income tax   = round(gross × income tax rate)
//! insurance    = round(gross × Σ insurance component rates)
//! net          = gross − income tax − insurance
//! ```
//!
//! Rounding uses [`round_currency`]. Gross pay is never rounded.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceEntry, Employee, Payslip};
use crate::store::Roster;

use super::overflow;
use super::rounding::round_currency;

/// Computes the payslip for one employee.
///
/// `attendance` may contain entries for any employee; only entries whose
/// `employee_id` matches are counted. An employee with no matching entries
/// is paid the base salary with deductions computed against it.
///
/// Resolving the employee is the caller's job (see [`Roster::get`]).
///
/// # Errors
///
/// - [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
///   if any rate is negative or a fraction exceeds 1
/// - [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
///   if an amount exceeds the decimal range
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payslip;
/// use payroll_engine::config::RateConfig;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(1, "Lee Chae-hyun", "Youngjin Pack");
/// let payslip = compute_payslip(&employee, &[], &RateConfig::default()).unwrap();
///
/// assert_eq!(payslip.gross_pay, Decimal::new(2_200_000, 0));
/// assert_eq!(payslip.income_tax, Decimal::new(72_600, 0));
/// assert_eq!(payslip.insurance, Decimal::new(213_400, 0));
/// assert_eq!(payslip.net_pay, Decimal::new(1_914_000, 0));
/// ```
pub fn compute_payslip(
    employee: &Employee,
    attendance: &[AttendanceEntry],
    rates: &RateConfig,
) -> EngineResult<Payslip> {
    rates.validate()?;
    payslip_for(employee, attendance, rates)
}

/// Computes a payslip for every rostered employee, in roster order.
///
/// # Errors
///
/// Fails as [`compute_payslip`] does, on the first employee that fails.
pub fn compute_payroll(
    roster: &Roster,
    attendance: &[AttendanceEntry],
    rates: &RateConfig,
) -> EngineResult<Vec<Payslip>> {
    rates.validate()?;
    roster
        .employees()
        .iter()
        .map(|employee| payslip_for(employee, attendance, rates))
        .collect()
}

/// Sums the overtime hours of the entries belonging to one employee.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if the sum overflows.
pub fn total_overtime_hours(
    employee_id: u32,
    attendance: &[AttendanceEntry],
) -> EngineResult<Decimal> {
    attendance
        .iter()
        .filter(|entry| entry.employee_id == employee_id)
        .try_fold(Decimal::ZERO, |total, entry| {
            total
                .checked_add(entry.overtime_hours)
                .ok_or_else(|| overflow("total overtime hours"))
        })
}

/// Payslip arithmetic over already-validated rates.
fn payslip_for(
    employee: &Employee,
    attendance: &[AttendanceEntry],
    rates: &RateConfig,
) -> EngineResult<Payslip> {
    let total_overtime_hours = total_overtime_hours(employee.id, attendance)?;
    let overtime_pay = total_overtime_hours
        .checked_mul(rates.overtime_hourly_rate)
        .ok_or_else(|| overflow("overtime pay"))?;
    let gross_pay = rates
        .base_salary
        .checked_add(overtime_pay)
        .ok_or_else(|| overflow("gross pay"))?;

    let income_tax = round_currency(
        gross_pay
            .checked_mul(rates.income_tax_rate)
            .ok_or_else(|| overflow("income tax"))?,
    );
    let insurance = round_currency(
        gross_pay
            .checked_mul(rates.insurance_rate_total())
            .ok_or_else(|| overflow("insurance"))?,
    );
    let net_pay = gross_pay
        .checked_sub(income_tax)
        .and_then(|pay| pay.checked_sub(insurance))
        .ok_or_else(|| overflow("net pay"))?;

    Ok(Payslip {
        employee_id: employee.id,
        employee_name: employee.name.clone(),
        department: employee.department.clone(),
        total_overtime_hours,
        base_salary: rates.base_salary,
        overtime_pay,
        gross_pay,
        income_tax,
        insurance,
        net_pay,
    })
}
