//! Dashboard summary aggregation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AttendanceEntry, DashboardSummary, Employee, ShiftType};

use super::overflow;

/// Aggregates the roster and attendance entries into dashboard statistics.
///
/// Headcount is the size of `employees` and does not depend on attendance.
/// Shift counts and the overtime total are taken over every entry supplied,
/// regardless of order.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if the overtime total overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_summary;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employees = vec![Employee::new(1, "Lee Chae-hyun", "Youngjin Pack")];
/// let summary = compute_summary(&employees, &[]).unwrap();
///
/// assert_eq!(summary.headcount, 1);
/// assert_eq!(summary.day_shift_count, 0);
/// assert_eq!(summary.night_shift_count, 0);
/// assert_eq!(summary.total_overtime_hours, Decimal::ZERO);
/// ```
pub fn compute_summary(
    employees: &[Employee],
    attendance: &[AttendanceEntry],
) -> EngineResult<DashboardSummary> {
    let mut day_shift_count = 0;
    let mut night_shift_count = 0;
    let mut total_overtime_hours = Decimal::ZERO;

    for entry in attendance {
        match entry.shift {
            ShiftType::Day => day_shift_count += 1,
            ShiftType::Night => night_shift_count += 1,
        }
        total_overtime_hours = total_overtime_hours
            .checked_add(entry.overtime_hours)
            .ok_or_else(|| overflow("total overtime hours"))?;
    }

    Ok(DashboardSummary {
        headcount: employees.len(),
        day_shift_count,
        night_shift_count,
        total_overtime_hours,
    })
}
