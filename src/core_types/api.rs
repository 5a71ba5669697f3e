//! The `PetFriendsApi` trait implemented by the HTTP client.
//!
//! Scenarios only ever see `&dyn PetFriendsApi`, so the client is injected
//! rather than shared through a global.

use crate::core_types::auth::AuthKey;
use crate::core_types::pet::{PetDetails, PetFilter};
use crate::core_types::response::ApiResponse;
use crate::error::PetResult;
use async_trait::async_trait;
use std::path::Path;

/// Operations exposed by the PetFriends REST API.
///
/// Every method is a single attempt. Non-2xx answers come back as `Ok` with
/// the status preserved; `Err` means the exchange itself did not complete or
/// a local input (photo file) was unusable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetFriendsApi: Send + Sync {
    /// Exchange email and password for an auth key (`GET /api/key`).
    async fn get_api_key(&self, email: &str, password: &str) -> PetResult<ApiResponse>;

    /// List pets, optionally restricted to the caller's own (`GET /api/pets`).
    async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> PetResult<ApiResponse>;

    /// Create a pet with a photo (`POST /api/pets`, multipart).
    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        details: &PetDetails,
        photo_path: &Path,
    ) -> PetResult<ApiResponse>;

    /// Create a pet without a photo (`POST /api/create_pet_simple`).
    async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        details: &PetDetails,
    ) -> PetResult<ApiResponse>;

    /// Attach a photo to an existing pet (`POST /api/pets/set_photo/{id}`).
    async fn add_photo_of_pets(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> PetResult<ApiResponse>;

    /// Replace name, type and age of an owned pet (`PUT /api/pets/{id}`).
    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        details: &PetDetails,
    ) -> PetResult<ApiResponse>;

    /// Remove a pet (`DELETE /api/pets/{id}`).
    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> PetResult<ApiResponse>;
}
