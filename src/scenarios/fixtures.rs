//! Setup and teardown shared by the scenarios.
//!
//! Every scenario that needs an existing pet creates one here and removes it
//! afterwards, so the outcome does not depend on what earlier runs left in the
//! account.

use super::{ScenarioContext, ScenarioError};
use crate::core_types::{ApiResponse, AuthKey, Pet, PetDetails, PetFilter, PetList};
use crate::logging::{log_debug, log_warn};

/// A key the service must reject.
pub const INVALID_KEY: &str = "12345";

pub const HUSKY_PHOTO: &str = "husky.jpg";
pub const SECOND_HUSKY_PHOTO: &str = "husky2.jpg";
pub const DOCUMENT_PHOTO: &str = "Husky3.docx";

pub fn invalid_key() -> AuthKey {
    AuthKey::from_raw(INVALID_KEY)
}

/// Details of the pet created for scenarios that operate on an owned pet.
pub fn provisioned_pet_details() -> PetDetails {
    PetDetails::new("Феликс", "пёс", "2")
}

/// Exchange the configured valid credentials for a key.
pub async fn acquire_key(ctx: &ScenarioContext<'_>) -> Result<AuthKey, ScenarioError> {
    let credentials = &ctx.config.valid;
    let response = ctx
        .api
        .get_api_key(&credentials.email, &credentials.password)
        .await?;

    if response.status != 200 {
        return Err(ScenarioError::Precondition(format!(
            "key exchange for {} returned status {}",
            credentials.email, response.status
        )));
    }

    let key: AuthKey = response.parse()?;
    if key.is_empty() {
        return Err(ScenarioError::Precondition(
            "key exchange returned an empty key".to_string(),
        ));
    }
    Ok(key)
}

/// Create a pet owned by the caller and return it.
pub async fn provision_pet(
    ctx: &ScenarioContext<'_>,
    key: &AuthKey,
) -> Result<Pet, ScenarioError> {
    let response = ctx
        .api
        .add_new_pet_without_photo(key, &provisioned_pet_details())
        .await?;

    if response.status != 200 {
        return Err(ScenarioError::Precondition(format!(
            "provisioning a pet returned status {}",
            response.status
        )));
    }

    let pet: Pet = response.parse()?;
    log_debug!(pet_id = %pet.id, "Provisioned fixture pet");
    Ok(pet)
}

/// The caller's own pets.
pub async fn my_pets(ctx: &ScenarioContext<'_>, key: &AuthKey) -> Result<PetList, ScenarioError> {
    let response = ctx.api.get_list_of_pets(key, PetFilter::MyPets).await?;
    if response.status != 200 {
        return Err(ScenarioError::Precondition(format!(
            "listing own pets returned status {}",
            response.status
        )));
    }
    Ok(response.parse()?)
}

/// Delete a pet the scenario created. Failures are logged, never raised, so
/// they cannot mask the scenario's own verdict.
pub async fn cleanup_pet(ctx: &ScenarioContext<'_>, key: &AuthKey, pet_id: &str) {
    match ctx.api.delete_pet(key, pet_id).await {
        Ok(response) if response.is_success() => {
            log_debug!(pet_id = %pet_id, "Removed fixture pet");
        }
        Ok(response) => {
            log_warn!(
                pet_id = %pet_id,
                status = response.status,
                "Fixture pet cleanup was rejected"
            );
        }
        Err(error) => {
            log_warn!(pet_id = %pet_id, error = %error, "Fixture pet cleanup failed");
        }
    }
}

/// Remove whatever pet a create call produced, if it produced one.
pub async fn cleanup_created(ctx: &ScenarioContext<'_>, key: &AuthKey, response: &ApiResponse) {
    if !response.is_success() {
        return;
    }
    if let Some(pet_id) = response.field_str("id") {
        cleanup_pet(ctx, key, &pet_id).await;
    }
}
