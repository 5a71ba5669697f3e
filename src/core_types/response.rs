//! Uniform response returned by every client operation.
//!
//! The service answers with JSON on success and, on most failure paths, with a
//! small HTML error page whose `<p>` element carries the human-readable
//! message (HTML-escaped, e.g. `This user wasn&#x27;t found in database`).

use crate::error::{PetError, PetResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

static PARAGRAPH: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").ok());

static NUMERIC_ENTITY: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"&#([xX][0-9a-fA-F]+|[0-9]+);").ok());

/// Parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// JSON when the payload parses as JSON, raw text otherwise.
    pub fn from_raw(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }
}

/// Status code plus parsed body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }

    /// String value of a top-level JSON field. Numbers are rendered as text
    /// because the service is inconsistent about `age`.
    pub fn field_str(&self, name: &str) -> Option<String> {
        match self.json()?.get(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Decode the JSON body into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> PetResult<T> {
        let value = self.json().ok_or_else(|| {
            PetError::response_parsing_error(format!(
                "expected a JSON body, got text with status {}",
                self.status
            ))
        })?;
        serde_json::from_value(value.clone()).map_err(|e| {
            PetError::response_parsing_error(format!(
                "{} (status {}): {e}",
                std::any::type_name::<T>(),
                self.status
            ))
        })
    }

    /// Whether the raw body contains `needle`, without any decoding.
    pub fn contains(&self, needle: &str) -> bool {
        match &self.body {
            ResponseBody::Text(text) => text.contains(needle),
            ResponseBody::Json(value) => value.to_string().contains(needle),
        }
    }

    /// Human-readable error message carried by a failure response.
    ///
    /// For the service's HTML error page this is the decoded text of the first
    /// `<p>` element. Plain text bodies are decoded as a whole. JSON bodies
    /// yield their `message` or `error` field when present.
    pub fn error_message(&self) -> Option<String> {
        match &self.body {
            ResponseBody::Text(text) => {
                let inner = PARAGRAPH
                    .as_ref()
                    .and_then(|re| re.captures(text))
                    .and_then(|c| c.get(1))
                    .map_or(text.as_str(), |m| m.as_str());
                let message = decode_entities(inner.trim());
                (!message.is_empty()).then_some(message)
            }
            ResponseBody::Json(value) => ["message", "error"]
                .iter()
                .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
                .map(str::to_string),
        }
    }
}

/// Decode the handful of HTML entities the service emits.
pub(crate) fn decode_entities(input: &str) -> String {
    let numeric = match NUMERIC_ENTITY.as_ref() {
        Some(re) => re
            .replace_all(input, |caps: &regex::Captures<'_>| {
                let code = &caps[1];
                let parsed = match code.strip_prefix(['x', 'X']) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => code.parse::<u32>().ok(),
                };
                parsed
                    .and_then(char::from_u32)
                    .map_or_else(|| caps[0].to_string(), |c| c.to_string())
            })
            .into_owned(),
        None => input.to_string(),
    };

    numeric
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
