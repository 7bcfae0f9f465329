//! Attendance and Payroll Engine
//!
//! This crate turns a roster of employees and their attendance records into
//! payslips (overtime, gross pay, income tax, social insurance, net pay) and
//! dashboard summary statistics.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
