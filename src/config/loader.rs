//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate
//! configuration, roster and attendance data from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::store::{AttendanceLog, Roster};

use super::types::{AttendanceConfig, RateConfig, RosterConfig};

/// Loads and provides access to payroll configuration and data.
///
/// The `ConfigLoader` reads YAML files from a directory, validates them and
/// exposes the rate configuration, roster and attendance log.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml       # Base salary, overtime, tax and insurance rates
/// ├── roster.yaml      # Employees
/// └── attendance.yaml  # Attendance entries (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let employee = loader.roster().get(1)?;
/// println!("{} earns a base of {}", employee.name, loader.rates().base_salary);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateConfig,
    roster: Roster,
    attendance: AttendanceLog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `rates.yaml` or `roster.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The rates fail validation (`InvalidConfig`)
    /// - The roster has duplicate ids or an attendance entry is invalid
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RateConfig>(&path.join("rates.yaml"))?;
        rates.validate()?;

        let roster_config = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;
        let roster = Roster::new(roster_config.employees)?;

        // Attendance is optional; a fresh deployment starts with an empty log
        let attendance_path = path.join("attendance.yaml");
        let attendance = if attendance_path.exists() {
            let attendance_config = Self::load_yaml::<AttendanceConfig>(&attendance_path)?;
            AttendanceLog::from_entries(attendance_config.entries, &roster)?
        } else {
            AttendanceLog::new()
        };

        debug!(
            path = %path.display(),
            employees = roster.len(),
            attendance_entries = attendance.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            rates,
            roster,
            attendance,
        })
    }

    /// Creates a loader from already-built parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the rates fail validation.
    pub fn from_parts(
        rates: RateConfig,
        roster: Roster,
        attendance: AttendanceLog,
    ) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self {
            rates,
            roster,
            attendance,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the attendance log loaded with the configuration.
    pub fn attendance(&self) -> &AttendanceLog {
        &self.attendance
    }

    /// Consumes the loader, returning its parts.
    pub fn into_parts(self) -> (RateConfig, Roster, AttendanceLog) {
        (self.rates, self.roster, self.attendance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes the given files into a fresh directory under the system temp dir.
    fn write_config_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    const RATES_YAML: &str = r#"
base_salary: "2200000"
overtime_hourly_rate: "15000"
income_tax_rate: "0.033"
insurance_component_rates: ["0.045", "0.035", "0.009", "0.008"]
"#;

    const ROSTER_YAML: &str = r#"
employees:
  - id: 1
    name: Lee Chae-hyun
    department: Youngjin Pack
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rates(), &RateConfig::default());
        assert_eq!(loader.roster().len(), 13);
        assert_eq!(loader.attendance().len(), 13);
    }

    #[test]
    fn test_sample_attendance_shift_mix() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let entries = loader.attendance().entries();

        let night = entries.iter().filter(|e| e.shift == ShiftType::Night).count();
        assert_eq!(night, 3);
        assert_eq!(entries[10].overtime_hours, dec("4.5"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_attendance_file_is_optional() {
        let dir = write_config_dir(
            "no-attendance",
            &[("rates.yaml", RATES_YAML), ("roster.yaml", ROSTER_YAML)],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(loader.attendance().is_empty());
        assert_eq!(loader.roster().len(), 1);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_rates_rejected() {
        let dir = write_config_dir(
            "bad-rates",
            &[
                (
                    "rates.yaml",
                    r#"
base_salary: "2200000"
overtime_hourly_rate: "15000"
income_tax_rate: "1.5"
insurance_component_rates: ["0.045", "0.035", "0.009", "0.008"]
"#,
                ),
                ("roster.yaml", ROSTER_YAML),
            ],
        );

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidConfig { ref field, .. }) if field == "income_tax_rate"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = write_config_dir(
            "malformed",
            &[("rates.yaml", "base_salary: [unclosed"), ("roster.yaml", ROSTER_YAML)],
        );

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert!(path.contains("rates.yaml")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_attendance_for_unknown_employee_rejected() {
        let dir = write_config_dir(
            "unknown-employee",
            &[
                ("rates.yaml", RATES_YAML),
                ("roster.yaml", ROSTER_YAML),
                (
                    "attendance.yaml",
                    r#"
entries:
  - id: 1
    employee_id: 2
    date: "2026-02-12"
    clock_in: "08:00"
    clock_out: "19:00"
    overtime_hours: "1.5"
    shift: day
"#,
                ),
            ],
        );

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::UnknownEmployee { id: 2 })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_from_parts_validates_rates() {
        let rates = RateConfig {
            base_salary: dec("-1"),
            ..RateConfig::default()
        };

        let result = ConfigLoader::from_parts(rates, Roster::default(), AttendanceLog::new());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
