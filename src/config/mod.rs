//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load the rate configuration, roster
//! and attendance data from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Base salary: {}", config.rates().base_salary);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, INSURANCE_COMPONENT_COUNT, INSURANCE_COMPONENT_NAMES, RateConfig,
    RosterConfig,
};
