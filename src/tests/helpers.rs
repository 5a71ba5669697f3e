//! Test helpers shared by the unit test modules.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::config::{PetFriendsConfig, SuiteConfig};
use crate::core_types::{ApiResponse, Credentials, MockPetFriendsApi, ResponseBody};
use serde_json::json;
use std::time::Duration;

pub const VALID_EMAIL: &str = "owner@example.com";
pub const VALID_PASSWORD: &str = "correct-horse";
pub const TEST_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";

/// Suite configuration that never touches the network.
pub fn create_test_suite_config() -> SuiteConfig {
    let api = PetFriendsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout: Duration::from_secs(1),
    };
    SuiteConfig::new(api, Credentials::new(VALID_EMAIL, VALID_PASSWORD))
}

pub fn json_response(status: u16, body: serde_json::Value) -> ApiResponse {
    ApiResponse::new(status, ResponseBody::Json(body))
}

/// The HTML page the service renders for 4xx errors.
pub fn html_error(status: u16, title: &str, escaped_message: &str) -> ApiResponse {
    let page = format!(
        "<!doctype html>\n<html lang=en>\n<title>{status} {title}</title>\n<h1>{title}</h1>\n<p>{escaped_message}</p>\n"
    );
    ApiResponse::new(status, ResponseBody::Text(page))
}

pub fn key_response() -> ApiResponse {
    json_response(200, json!({ "key": TEST_KEY }))
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

pub fn pet_response(id: &str, name: &str) -> ApiResponse {
    json_response(200, pet_json(id, name, "пёс", "2"))
}

pub fn pet_list_response(ids: &[&str]) -> ApiResponse {
    let pets: Vec<_> = ids
        .iter()
        .map(|id| pet_json(id, "Феликс", "пёс", "2"))
        .collect();
    json_response(200, json!({ "pets": pets }))
}

/// Mock whose key exchange always succeeds.
pub fn mock_with_key() -> MockPetFriendsApi {
    let mut api = MockPetFriendsApi::new();
    api.expect_get_api_key()
        .returning(|_, _| Ok(key_response()));
    api
}
