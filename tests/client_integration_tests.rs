//! Integration Tests for the PetFriends HTTP Client
//!
//! UNIT UNDER TEST: PetFriendsClient against a mock HTTP server
//!
//! BUSINESS RESPONSIBILITY:
//!   - Send credentials and auth keys in the headers the service reads
//!   - Encode pet details as form fields and photos as multipart parts
//!   - Return every status as a response, never as an error
//!   - Report transport and local file failures as errors
//!
//! TEST COVERAGE:
//!   - Paths, methods, headers and query per operation
//!   - Form and multipart bodies
//!   - Non-2xx responses including HTML error pages
//!   - Missing photo files and unreachable servers

mod common;

use common::*;
use pet_friends::{AuthKey, Pet, PetDetails, PetError, PetFilter, PetFriendsApi, PetList};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_key() -> AuthKey {
    AuthKey::from_raw(TEST_KEY)
}

// ============================================================================
// Key exchange
// ============================================================================

#[tokio::test]
async fn test_get_api_key_sends_credential_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", VALID_EMAIL))
        .and(header("password", VALID_PASSWORD))
        .respond_with(key_template())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_api_key(VALID_EMAIL, VALID_PASSWORD)
        .await
        .expect("transport should succeed");

    assert_eq!(response.status, 200);
    let key: AuthKey = response.parse().expect("key payload");
    assert_eq!(key.as_str(), TEST_KEY);
}

#[tokio::test]
async fn test_rejected_key_exchange_is_a_response_not_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(user_not_found_template())
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_api_key("nobody@example.invalid", "wrong")
        .await
        .expect("a 403 is still a response");

    assert_eq!(response.status, 403);
    assert!(!response.is_success());
    assert_eq!(
        response.error_message().as_deref(),
        Some("This user wasn't found in database")
    );
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_sends_auth_key_and_filter() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_KEY))
        .and(query_param("filter", "my_pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pets": [pet_json("p-1", "Феликс", "пёс", "2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_list_of_pets(&test_key(), PetFilter::MyPets)
        .await
        .unwrap();

    let list: PetList = response.parse().unwrap();
    assert!(list.contains_id("p-1"));
}

#[tokio::test]
async fn test_list_all_sends_empty_filter() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(query_param("filter", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pets": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_list_of_pets(&test_key(), PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(auth_key_required_template())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&format!("{}/", mock_server.uri()));
    let response = client
        .get_list_of_pets(&AuthKey::from_raw("12345"), PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(response.contains("auth_key"));
}

// ============================================================================
// Creation and update
// ============================================================================

#[tokio::test]
async fn test_add_new_pet_uploads_multipart_photo() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_KEY))
        .and(body_bytes_contain("name=\"name\""))
        .and(body_bytes_contain("name=\"animal_type\""))
        .and(body_bytes_contain("name=\"pet_photo\"; filename=\"husky.jpg\""))
        .and(body_bytes_contain("image/jpeg"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pet_json("p-2", "Rex", "husky", "4")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let details = PetDetails::new("Rex", "husky", "4");
    let response = client
        .add_new_pet(&test_key(), &details, &images_dir().join("husky.jpg"))
        .await
        .unwrap();

    let pet: Pet = response.parse().unwrap();
    assert_eq!(pet.id, "p-2");
    assert_eq!(pet.name, "Rex");
}

#[tokio::test]
async fn test_add_new_pet_with_missing_photo_fails_before_sending() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let details = PetDetails::new("Rex", "husky", "4");
    let result = client
        .add_new_pet(&test_key(), &details, &images_dir().join("missing.jpg"))
        .await;

    match result {
        Err(PetError::PhotoUnavailable { path, .. }) => {
            assert!(path.ends_with("missing.jpg"));
        }
        other => panic!("Expected PhotoUnavailable, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_new_pet_without_photo_posts_form() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create_pet_simple"))
        .and(header("auth_key", TEST_KEY))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("name=Shadow"))
        .and(body_string_contains("animal_type=dog"))
        .and(body_string_contains("age=4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pet_json("p-3", "Shadow", "dog", "4")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .add_new_pet_without_photo(&test_key(), &PetDetails::new("Shadow", "dog", 4))
        .await
        .unwrap();

    assert_eq!(response.field_str("id").as_deref(), Some("p-3"));
}

#[tokio::test]
async fn test_add_photo_targets_pet_id() {
    let mock_server = MockServer::start().await;
    let mut with_photo = pet_json("p-4", "Феликс", "пёс", "2");
    with_photo["pet_photo"] = json!("data:image/jpeg;base64,/9j/4AAQ");

    Mock::given(method("POST"))
        .and(path("/api/pets/set_photo/p-4"))
        .and(body_bytes_contain("filename=\"husky2.jpg\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_photo))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .add_photo_of_pets(&test_key(), "p-4", &images_dir().join("husky2.jpg"))
        .await
        .unwrap();

    let pet: Pet = response.parse().unwrap();
    assert!(pet.has_photo());
}

#[tokio::test]
async fn test_update_pet_info_uses_put() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/pets/p-5"))
        .and(body_string_contains("name=Murzik"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pet_json("p-5", "Murzik", "cat", "5")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .update_pet_info(&test_key(), "p-5", &PetDetails::new("Murzik", "cat", 5))
        .await
        .unwrap();

    assert_eq!(response.field_str("name").as_deref(), Some("Murzik"));
}

// ============================================================================
// Deletion and transport failures
// ============================================================================

#[tokio::test]
async fn test_delete_returns_empty_body_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/pets/p-6"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client.delete_pet(&test_key(), "p-6").await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.text(), Some(""));
}

#[tokio::test]
async fn test_pet_id_is_encoded_as_a_single_path_segment() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/pets/p%2F7%3Fx%23y"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/pets/p%2F7%3Fx%23y"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let deleted = client.delete_pet(&test_key(), "p/7?x#y").await.unwrap();
    let updated = client
        .update_pet_info(&test_key(), "p/7?x#y", &PetDetails::new("Rex", "dog", 1))
        .await
        .unwrap();

    assert_eq!(deleted.status, 200);
    assert_eq!(updated.status, 200);
}

#[tokio::test]
async fn test_unreachable_server_is_request_failed() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = create_test_client(&uri);
    let result = client.get_api_key(VALID_EMAIL, VALID_PASSWORD).await;

    assert!(
        matches!(result, Err(PetError::RequestFailed { .. })),
        "Expected RequestFailed, got: {:?}",
        result
    );
}
