//! Audit trace for payslip calculations.
//!
//! A payslip is explained as six ordered steps, one per line of the payroll
//! formula. Decimal values are recorded as normalized strings so the trace
//! serializes without losing precision.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{INSURANCE_COMPONENT_NAMES, RateConfig};
use crate::error::EngineResult;
use crate::models::{
    AttendanceEntry, AuditStep, AuditTrace, AuditWarning, Employee, PayPeriod, PayrollResult,
    Payslip,
};

use super::overflow;
use super::payslip::compute_payslip;
use super::shift_classification::check_shift_classification;

fn dec_str(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Builds the ordered audit steps explaining how `payslip` was derived.
///
/// The steps are `overtime_total`, `overtime_pay`, `gross_pay`,
/// `income_tax`, `insurance` and `net_pay`, numbered from 1. The insurance
/// step lists each component's unrounded share of gross pay; only their
/// combined total is rounded.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if an unrounded deduction overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{compute_payslip, payslip_audit_steps};
/// use payroll_engine::config::RateConfig;
/// use payroll_engine::models::Employee;
///
/// let rates = RateConfig::default();
/// let employee = Employee::new(1, "Lee Chae-hyun", "Youngjin Pack");
/// let payslip = compute_payslip(&employee, &[], &rates).unwrap();
///
/// let steps = payslip_audit_steps(&payslip, &rates).unwrap();
/// assert_eq!(steps.len(), 6);
/// assert_eq!(steps[0].rule_id, "overtime_total");
/// assert_eq!(steps[5].rule_id, "net_pay");
/// ```
pub fn payslip_audit_steps(
    payslip: &Payslip,
    rates: &RateConfig,
) -> EngineResult<Vec<AuditStep>> {
    let insurance_rate = rates.insurance_rate_total();
    let unrounded_tax = payslip
        .gross_pay
        .checked_mul(rates.income_tax_rate)
        .ok_or_else(|| overflow("income tax"))?;
    let unrounded_insurance = payslip
        .gross_pay
        .checked_mul(insurance_rate)
        .ok_or_else(|| overflow("insurance"))?;

    let mut components = serde_json::Map::new();
    let mut component_amounts = serde_json::Map::new();
    for (name, rate) in INSURANCE_COMPONENT_NAMES
        .iter()
        .zip(rates.insurance_component_rates.iter())
    {
        let amount = payslip
            .gross_pay
            .checked_mul(*rate)
            .ok_or_else(|| overflow(name))?;
        components.insert(name.to_string(), serde_json::Value::String(dec_str(*rate)));
        component_amounts.insert(name.to_string(), serde_json::Value::String(dec_str(amount)));
    }

    Ok(vec![
        AuditStep {
            step_number: 1,
            rule_id: "overtime_total".to_string(),
            rule_name: "Overtime Total".to_string(),
            input: serde_json::json!({
                "employee_id": payslip.employee_id
            }),
            output: serde_json::json!({
                "total_overtime_hours": dec_str(payslip.total_overtime_hours)
            }),
            reasoning: format!(
                "Summed {} overtime hours across attendance entries for employee {}",
                dec_str(payslip.total_overtime_hours),
                payslip.employee_id
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "overtime_pay".to_string(),
            rule_name: "Overtime Pay".to_string(),
            input: serde_json::json!({
                "total_overtime_hours": dec_str(payslip.total_overtime_hours),
                "overtime_hourly_rate": dec_str(rates.overtime_hourly_rate)
            }),
            output: serde_json::json!({
                "overtime_pay": dec_str(payslip.overtime_pay)
            }),
            reasoning: format!(
                "{} hours × {} = {}",
                dec_str(payslip.total_overtime_hours),
                dec_str(rates.overtime_hourly_rate),
                dec_str(payslip.overtime_pay)
            ),
        },
        AuditStep {
            step_number: 3,
            rule_id: "gross_pay".to_string(),
            rule_name: "Gross Pay".to_string(),
            input: serde_json::json!({
                "base_salary": dec_str(payslip.base_salary),
                "overtime_pay": dec_str(payslip.overtime_pay)
            }),
            output: serde_json::json!({
                "gross_pay": dec_str(payslip.gross_pay)
            }),
            reasoning: format!(
                "{} base salary + {} overtime pay = {}",
                dec_str(payslip.base_salary),
                dec_str(payslip.overtime_pay),
                dec_str(payslip.gross_pay)
            ),
        },
        AuditStep {
            step_number: 4,
            rule_id: "income_tax".to_string(),
            rule_name: "Income Tax".to_string(),
            input: serde_json::json!({
                "gross_pay": dec_str(payslip.gross_pay),
                "income_tax_rate": dec_str(rates.income_tax_rate)
            }),
            output: serde_json::json!({
                "unrounded": dec_str(unrounded_tax),
                "income_tax": dec_str(payslip.income_tax)
            }),
            reasoning: format!(
                "{} × {} = {}, rounded half away from zero to {}",
                dec_str(payslip.gross_pay),
                dec_str(rates.income_tax_rate),
                dec_str(unrounded_tax),
                dec_str(payslip.income_tax)
            ),
        },
        AuditStep {
            step_number: 5,
            rule_id: "insurance".to_string(),
            rule_name: "Social Insurance".to_string(),
            input: serde_json::json!({
                "gross_pay": dec_str(payslip.gross_pay),
                "components": components,
                "combined_rate": dec_str(insurance_rate)
            }),
            output: serde_json::json!({
                "component_amounts": component_amounts,
                "unrounded": dec_str(unrounded_insurance),
                "insurance": dec_str(payslip.insurance)
            }),
            reasoning: format!(
                "{} × {} = {}, rounded half away from zero to {}",
                dec_str(payslip.gross_pay),
                dec_str(insurance_rate),
                dec_str(unrounded_insurance),
                dec_str(payslip.insurance)
            ),
        },
        AuditStep {
            step_number: 6,
            rule_id: "net_pay".to_string(),
            rule_name: "Net Pay".to_string(),
            input: serde_json::json!({
                "gross_pay": dec_str(payslip.gross_pay),
                "income_tax": dec_str(payslip.income_tax),
                "insurance": dec_str(payslip.insurance)
            }),
            output: serde_json::json!({
                "net_pay": dec_str(payslip.net_pay)
            }),
            reasoning: format!(
                "{} − {} − {} = {}",
                dec_str(payslip.gross_pay),
                dec_str(payslip.income_tax),
                dec_str(payslip.insurance),
                dec_str(payslip.net_pay)
            ),
        },
    ])
}

/// Computes a payslip and wraps it in a [`PayrollResult`] with its audit trace.
///
/// `attendance` is expected to be already narrowed to `pay_period` when one
/// is given; the period is only recorded on the result. Entries of the
/// employee whose shift label disagrees with their clock times are reported
/// as warnings and still counted.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
/// if the rates fail validation, or
/// [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if an amount overflows.
pub fn calculate_payroll_result(
    employee: &Employee,
    attendance: &[AttendanceEntry],
    rates: &RateConfig,
    pay_period: Option<PayPeriod>,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();

    let payslip = compute_payslip(employee, attendance, rates)?;
    let steps = payslip_audit_steps(&payslip, rates)?;
    let warnings: Vec<AuditWarning> = attendance
        .iter()
        .filter(|entry| entry.employee_id == employee.id)
        .filter_map(check_shift_classification)
        .collect();

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_period,
        payslip,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
