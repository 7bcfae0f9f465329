//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_payroll_result, check_shift_classification, compute_payroll, compute_summary,
};
use crate::models::{AttendanceEntry, PayPeriod};
use crate::store::{AttendanceLog, check_overtime};

use super::request::{AttendanceRequest, CalculationRequest, PeriodQuery};
use super::response::{ApiError, ApiErrorResponse, AttendanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route(
            "/attendance",
            get(list_attendance_handler).post(record_attendance_handler),
        )
        .route("/summary", get(summary_handler))
        .route("/payslips", get(list_payslips_handler))
        .route("/payslips/:employee_id", get(payslip_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a 400 error.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Resolves the optional period query into a pay period.
fn resolve_period(
    query: Result<Query<PeriodQuery>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<Option<PayPeriod>, ApiErrorResponse> {
    let Query(query) = query.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid query string"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })?;

    query.pay_period().map_err(|message| {
        warn!(
            correlation_id = %correlation_id,
            error = %message,
            "Invalid pay period"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(message))
    })
}

/// Copies the log entries that fall in the period, or all of them.
fn snapshot(log: &AttendanceLog, pay_period: Option<&PayPeriod>) -> Vec<AttendanceEntry> {
    match pay_period {
        Some(period) => log.in_period(period),
        None => log.entries().to_vec(),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.roster().employees())
}

/// Handler for GET /attendance.
async fn list_attendance_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let pay_period = match resolve_period(query, correlation_id) {
        Ok(period) => period,
        Err(api_error) => return error_response(api_error),
    };

    let entries = snapshot(&*state.attendance().read().await, pay_period.as_ref());
    json_response(StatusCode::OK, entries)
}

/// Handler for POST /attendance.
///
/// Records the entry as supplied. A shift label that disagrees with the
/// clock times is reported as a warning and does not block the submission.
async fn record_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    let mut log = state.attendance().write().await;
    let entry = match request.into_entry(&log) {
        Ok(entry) => entry,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance rejected"
            );
            return error_response(err.into());
        }
    };
    let warnings: Vec<_> = check_shift_classification(&entry).into_iter().collect();

    for warning in &warnings {
        warn!(
            correlation_id = %correlation_id,
            entry_id = entry.id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    match log.record(entry, state.roster()) {
        Ok(recorded) => {
            info!(
                correlation_id = %correlation_id,
                entry_id = recorded.id,
                employee_id = recorded.employee_id,
                overtime_hours = %recorded.overtime_hours,
                "Attendance recorded"
            );
            json_response(
                StatusCode::CREATED,
                AttendanceResponse {
                    entry: recorded.clone(),
                    warnings,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /summary.
async fn summary_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let pay_period = match resolve_period(query, correlation_id) {
        Ok(period) => period,
        Err(api_error) => return error_response(api_error),
    };

    let entries = snapshot(&*state.attendance().read().await, pay_period.as_ref());
    match compute_summary(state.roster().employees(), &entries) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                headcount = summary.headcount,
                day_shift_count = summary.day_shift_count,
                night_shift_count = summary.night_shift_count,
                total_overtime_hours = %summary.total_overtime_hours,
                "Summary computed"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Summary failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /payslips.
async fn list_payslips_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let pay_period = match resolve_period(query, correlation_id) {
        Ok(period) => period,
        Err(api_error) => return error_response(api_error),
    };

    let entries = snapshot(&*state.attendance().read().await, pay_period.as_ref());

    let start_time = Instant::now();
    match compute_payroll(state.roster(), &entries, state.rates()) {
        Ok(payslips) => {
            info!(
                correlation_id = %correlation_id,
                payslips_count = payslips.len(),
                entries_count = entries.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll computed"
            );
            json_response(StatusCode::OK, payslips)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /payslips/:employee_id.
///
/// Returns the payslip wrapped with its audit trace.
async fn payslip_handler(
    State(state): State<AppState>,
    employee_id: Result<Path<u32>, PathRejection>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let employee_id = match employee_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid employee id"
            );
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            )));
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id,
        "Processing payslip request"
    );

    let pay_period = match resolve_period(query, correlation_id) {
        Ok(period) => period,
        Err(api_error) => return error_response(api_error),
    };

    let employee = match state.roster().get(employee_id) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee lookup failed"
            );
            return error_response(err.into());
        }
    };

    let entries: Vec<AttendanceEntry> = state
        .attendance()
        .read()
        .await
        .for_employee(employee_id)
        .filter(|entry| pay_period.is_none_or(|period| period.contains_date(entry.date)))
        .cloned()
        .collect();

    match calculate_payroll_result(employee, &entries, state.rates(), pay_period) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id,
                gross_pay = %result.payslip.gross_pay,
                net_pay = %result.payslip.net_pay,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Payslip computed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /calculate.
///
/// Computes a payslip from the employee and attendance in the request body,
/// using the request's rates if given and the loaded rates otherwise.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    let pay_period = match request.pay_period() {
        Ok(period) => period,
        Err(message) => {
            warn!(
                correlation_id = %correlation_id,
                error = %message,
                "Invalid pay period"
            );
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                message,
            )));
        }
    };

    let rates = request.rates.unwrap_or_else(|| state.rates().clone());
    let entries: Vec<AttendanceEntry> = match pay_period {
        Some(period) => request
            .attendance
            .into_iter()
            .filter(|entry| period.contains_date(entry.date))
            .collect(),
        None => request.attendance,
    };

    if let Err(err) = entries.iter().try_for_each(check_overtime) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Attendance rejected"
        );
        return error_response(err.into());
    }

    match calculate_payroll_result(&request.employee, &entries, &rates, pay_period) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = request.employee.id,
                entries_count = entries.len(),
                gross_pay = %result.payslip.gross_pay,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}
