//! Test helper utilities for pet-friends integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use pet_friends::{Credentials, PetFriendsClient, PetFriendsConfig, SuiteConfig};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::ResponseTemplate;

pub const VALID_EMAIL: &str = "owner@example.com";
pub const VALID_PASSWORD: &str = "correct-horse";
pub const TEST_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";

/// Directory holding the photo fixtures uploaded by the scenarios.
pub fn images_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/images"))
}

pub fn create_test_api_config(base_url: &str) -> PetFriendsConfig {
    PetFriendsConfig {
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn create_test_client(base_url: &str) -> PetFriendsClient {
    PetFriendsClient::new(create_test_api_config(base_url)).expect("valid test configuration")
}

pub fn create_test_suite_config(base_url: &str) -> SuiteConfig {
    SuiteConfig::new(
        create_test_api_config(base_url),
        Credentials::new(VALID_EMAIL, VALID_PASSWORD),
    )
    .with_images_dir(images_dir())
}

pub fn pet_json(id: &str, name: &str, animal_type: &str, age: &str) -> serde_json::Value {
    json!({
        "age": age,
        "animal_type": animal_type,
        "created_at": "1687858373.5618598",
        "id": id,
        "name": name,
        "pet_photo": "",
        "user_id": "6f0e3c2b9a"
    })
}

pub fn key_template() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "key": TEST_KEY }))
}

/// The HTML page the service renders for 4xx errors.
pub fn html_error_template(status: u16, title: &str, escaped_message: &str) -> ResponseTemplate {
    let page = format!(
        "<!doctype html>\n<html lang=en>\n<title>{status} {title}</title>\n<h1>{title}</h1>\n<p>{escaped_message}</p>\n"
    );
    ResponseTemplate::new(status).set_body_raw(page, "text/html; charset=utf-8")
}

pub fn user_not_found_template() -> ResponseTemplate {
    html_error_template(403, "Forbidden", "This user wasn&#x27;t found in database")
}

pub fn auth_key_required_template() -> ResponseTemplate {
    html_error_template(403, "Forbidden", "Please provide &#x27;auth_key&#x27; Header")
}

/// Matches requests whose raw body contains `needle`. Unlike
/// `body_string_contains` this works on multipart bodies carrying binary photos.
pub struct BodyBytesContain(pub Vec<u8>);

pub fn body_bytes_contain(needle: &str) -> BodyBytesContain {
    BodyBytesContain(needle.as_bytes().to_vec())
}

impl wiremock::Match for BodyBytesContain {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !self.0.is_empty()
            && request
                .body
                .windows(self.0.len())
                .any(|window| window == self.0.as_slice())
    }
}
