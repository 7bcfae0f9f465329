//! HTTP API module for the Payroll Engine.
//!
//! This module exposes the roster, attendance submission, dashboard summary
//! and payslips as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, CalculationRequest, PeriodQuery};
pub use response::{ApiError, AttendanceResponse};
pub use state::AppState;
