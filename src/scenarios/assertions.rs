//! Checks applied to an [`ApiResponse`] inside scenarios.

use crate::core_types::response::decode_entities;
use crate::core_types::{ApiResponse, ResponseBody};
use thiserror::Error;

/// Marker the service puts in its 403 page for unknown users.
pub const USER_NOT_FOUND: &str = "This user wasn't found in database";

/// Marker the service puts in its 403 page for a missing or invalid key.
pub const AUTH_KEY_REQUIRED: &str = "Please provide 'auth_key' Header";

/// An assertion that did not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation}: {detail}")]
pub struct Mismatch {
    /// Client operation whose response was checked.
    pub operation: &'static str,
    pub detail: String,
}

impl Mismatch {
    pub fn new(operation: &'static str, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }
}

pub fn expect_status(
    operation: &'static str,
    response: &ApiResponse,
    expected: u16,
) -> Result<(), Mismatch> {
    expect_status_in(operation, response, &[expected])
}

pub fn expect_status_in(
    operation: &'static str,
    response: &ApiResponse,
    expected: &[u16],
) -> Result<(), Mismatch> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    Err(Mismatch::new(
        operation,
        format!(
            "expected status {expected:?}, got {} ({})",
            response.status,
            summarize(response)
        ),
    ))
}

pub fn expect_field(
    operation: &'static str,
    response: &ApiResponse,
    field: &str,
    expected: &str,
) -> Result<(), Mismatch> {
    match response.field_str(field) {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(Mismatch::new(
            operation,
            format!("expected {field} = {expected:?}, got {actual:?}"),
        )),
        None => Err(Mismatch::new(
            operation,
            format!("response has no {field} field ({})", summarize(response)),
        )),
    }
}

pub fn expect_non_empty_field(
    operation: &'static str,
    response: &ApiResponse,
    field: &str,
) -> Result<(), Mismatch> {
    match response.field_str(field) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(Mismatch::new(
            operation,
            format!("expected a non-empty {field} ({})", summarize(response)),
        )),
    }
}

/// The body carries `needle`, compared after HTML entity decoding and with
/// runs of whitespace collapsed.
pub fn expect_message(
    operation: &'static str,
    response: &ApiResponse,
    needle: &str,
) -> Result<(), Mismatch> {
    let haystack = match &response.body {
        ResponseBody::Text(text) => decode_entities(text),
        ResponseBody::Json(value) => value.to_string(),
    };
    if collapse_whitespace(&haystack).contains(&collapse_whitespace(needle)) {
        return Ok(());
    }
    Err(Mismatch::new(
        operation,
        format!("expected message containing {needle:?} ({})", summarize(response)),
    ))
}

pub fn ensure(
    operation: &'static str,
    condition: bool,
    detail: impl FnOnce() -> String,
) -> Result<(), Mismatch> {
    if condition {
        Ok(())
    } else {
        Err(Mismatch::new(operation, detail()))
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn summarize(response: &ApiResponse) -> String {
    let text = response
        .error_message()
        .unwrap_or_else(|| match &response.body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text.clone(),
        });
    let mut short: String = text.chars().take(120).collect();
    if text.chars().count() > 120 {
        short.push('…');
    }
    short
}
