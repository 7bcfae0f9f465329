//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{ConfigLoader, RateConfig};
use crate::store::{AttendanceLog, Roster};

/// Shared application state.
///
/// The rate configuration and roster are read-only after load. The
/// attendance log takes submissions, so it sits behind a read-write lock:
/// submissions take the write lock, reads take the read lock.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<RateConfig>,
    roster: Arc<Roster>,
    attendance: Arc<RwLock<AttendanceLog>>,
}

impl AppState {
    /// Creates a new application state from loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let (rates, roster, attendance) = config.into_parts();
        Self {
            rates: Arc::new(rates),
            roster: Arc::new(roster),
            attendance: Arc::new(RwLock::new(attendance)),
        }
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the shared attendance log.
    pub fn attendance(&self) -> &RwLock<AttendanceLog> {
        &self.attendance
    }
}
