//! Payslip and dashboard summary models.
//!
//! Both types are derived on demand from the roster and attendance log and
//! are never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A computed payslip for one employee.
///
/// Monetary amounts are whole currency units except `overtime_pay` and
/// `gross_pay`, which carry whatever precision the overtime hours and rate
/// produce.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Payslip;
/// use rust_decimal::Decimal;
///
/// let payslip = Payslip {
///     employee_id: 1,
///     employee_name: "Lee Chae-hyun".to_string(),
///     department: "Youngjin Pack".to_string(),
///     total_overtime_hours: Decimal::ZERO,
///     base_salary: Decimal::new(2_200_000, 0),
///     overtime_pay: Decimal::ZERO,
///     gross_pay: Decimal::new(2_200_000, 0),
///     income_tax: Decimal::new(72_600, 0),
///     insurance: Decimal::new(213_400, 0),
///     net_pay: Decimal::new(1_914_000, 0),
/// };
/// assert_eq!(payslip.total_deductions(), Decimal::new(286_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The ID of the employee the payslip is for.
    pub employee_id: u32,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department.
    pub department: String,
    /// Sum of overtime hours across the employee's attendance entries.
    pub total_overtime_hours: Decimal,
    /// Fixed base salary for the pay period.
    pub base_salary: Decimal,
    /// Overtime hours multiplied by the hourly overtime rate.
    pub overtime_pay: Decimal,
    /// Base salary plus overtime pay.
    pub gross_pay: Decimal,
    /// Income tax withheld, rounded to whole currency units.
    pub income_tax: Decimal,
    /// Social insurance withheld, rounded to whole currency units.
    pub insurance: Decimal,
    /// Gross pay minus income tax and insurance.
    pub net_pay: Decimal,
}

impl Payslip {
    /// Returns the sum of all deductions (income tax plus insurance).
    pub fn total_deductions(&self) -> Decimal {
        self.income_tax + self.insurance
    }
}

/// Summary statistics shown on the attendance dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of employees on the roster.
    pub headcount: usize,
    /// Number of attendance entries classified as day shifts.
    pub day_shift_count: usize,
    /// Number of attendance entries classified as night shifts.
    pub night_shift_count: usize,
    /// Sum of overtime hours across all attendance entries.
    pub total_overtime_hours: Decimal,
}
