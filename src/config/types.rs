//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, Employee};

/// Number of social insurance components withheld from gross pay.
pub const INSURANCE_COMPONENT_COUNT: usize = 4;

/// Names of the insurance components, in the order of
/// [`RateConfig::insurance_component_rates`].
pub const INSURANCE_COMPONENT_NAMES: [&str; INSURANCE_COMPONENT_COUNT] = [
    "national_pension",
    "health_insurance",
    "long_term_care",
    "employment_insurance",
];

/// Rate configuration governing payslip computation for a pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfig::default();
/// assert!(rates.validate().is_ok());
/// assert_eq!(rates.insurance_rate_total(), Decimal::new(97, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Fixed base salary per pay period.
    pub base_salary: Decimal,
    /// Amount paid per overtime hour.
    pub overtime_hourly_rate: Decimal,
    /// Income tax as a fraction of gross pay.
    pub income_tax_rate: Decimal,
    /// Social insurance components as fractions of gross pay.
    pub insurance_component_rates: [Decimal; INSURANCE_COMPONENT_COUNT],
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_salary: Decimal::new(2_200_000, 0),
            overtime_hourly_rate: Decimal::new(15_000, 0),
            income_tax_rate: Decimal::new(33, 3),
            insurance_component_rates: [
                Decimal::new(45, 3),
                Decimal::new(35, 3),
                Decimal::new(9, 3),
                Decimal::new(8, 3),
            ],
        }
    }
}

impl RateConfig {
    /// Checks that no rate is negative and no fraction exceeds 1.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("base_salary", self.base_salary)?;
        non_negative("overtime_hourly_rate", self.overtime_hourly_rate)?;
        fraction("income_tax_rate", self.income_tax_rate)?;

        for (index, rate) in self.insurance_component_rates.iter().enumerate() {
            fraction(&format!("insurance_component_rates[{}]", index), *rate)?;
        }

        Ok(())
    }

    /// Returns the combined insurance rate (sum of all components).
    pub fn insurance_rate_total(&self) -> Decimal {
        self.insurance_component_rates.iter().sum()
    }
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

fn fraction(field: &str, value: Decimal) -> EngineResult<()> {
    non_negative(field, value)?;
    if value > Decimal::ONE {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be a fraction between 0 and 1, got {}", value),
        });
    }
    Ok(())
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees in display order.
    pub employees: Vec<Employee>,
}

/// Attendance configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    /// Attendance entries in recorded order.
    #[serde(default)]
    pub entries: Vec<AttendanceEntry>,
}
