//! Listing, creation, photo, update and delete scenarios.

use super::assertions::{
    ensure, expect_field, expect_message, expect_non_empty_field, expect_status,
    expect_status_in, AUTH_KEY_REQUIRED,
};
use super::fixtures::{
    acquire_key, cleanup_created, cleanup_pet, invalid_key, my_pets, provision_pet, HUSKY_PHOTO,
    SECOND_HUSKY_PHOTO,
};
use super::{ScenarioContext, ScenarioError, ScenarioResult};
use crate::core_types::{PetDetails, PetFilter, PetList};

pub(super) async fn list_all_pets_with_valid_key(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let pet = provision_pet(ctx, &key).await?;

    let result: ScenarioResult = async {
        let response = ctx.api.get_list_of_pets(&key, PetFilter::All).await?;
        expect_status("get_list_of_pets", &response, 200)?;
        let list: PetList = response.parse()?;
        ensure("get_list_of_pets", !list.is_empty(), || {
            "expected at least one pet in the full listing".to_string()
        })?;
        Ok::<(), ScenarioError>(())
    }
    .await;

    cleanup_pet(ctx, &key, &pet.id).await;
    result
}

pub(super) async fn list_pets_with_invalid_key(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let response = ctx
        .api
        .get_list_of_pets(&invalid_key(), PetFilter::All)
        .await?;

    expect_status("get_list_of_pets", &response, 403)?;
    expect_message("get_list_of_pets", &response, AUTH_KEY_REQUIRED)?;
    Ok(())
}

pub(super) async fn add_pet_with_valid_data(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Харди", "хаски", "4");
    let response = ctx
        .api
        .add_new_pet(&key, &details, &ctx.config.image(HUSKY_PHOTO))
        .await?;

    let verdict = expect_status("add_new_pet", &response, 200)
        .and_then(|()| expect_field("add_new_pet", &response, "name", &details.name));

    cleanup_created(ctx, &key, &response).await;
    verdict.map_err(Into::into)
}

pub(super) async fn add_pet_with_invalid_key(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let details = PetDetails::new("Харди", "хаски", "4");
    let response = ctx
        .api
        .add_new_pet(&invalid_key(), &details, &ctx.config.image(HUSKY_PHOTO))
        .await?;

    expect_status("add_new_pet", &response, 403)?;
    expect_message("add_new_pet", &response, AUTH_KEY_REQUIRED)?;
    Ok(())
}

pub(super) async fn add_pet_without_photo(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Тень", "Собака", 4);
    let response = ctx.api.add_new_pet_without_photo(&key, &details).await?;

    let verdict = expect_status("add_new_pet_without_photo", &response, 200).and_then(|()| {
        expect_field("add_new_pet_without_photo", &response, "name", &details.name)
    });

    cleanup_created(ctx, &key, &response).await;
    verdict.map_err(Into::into)
}

pub(super) async fn add_photo_to_own_pet(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let pet = provision_pet(ctx, &key).await?;

    let result: ScenarioResult = async {
        let response = ctx
            .api
            .add_photo_of_pets(&key, &pet.id, &ctx.config.image(SECOND_HUSKY_PHOTO))
            .await?;
        expect_status("add_photo_of_pets", &response, 200)?;
        expect_non_empty_field("add_photo_of_pets", &response, "pet_photo")?;
        Ok::<(), ScenarioError>(())
    }
    .await;

    cleanup_pet(ctx, &key, &pet.id).await;
    result
}

pub(super) async fn update_own_pet(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let pet = provision_pet(ctx, &key).await?;

    let result: ScenarioResult = async {
        let details = PetDetails::new("Мурзик", "Котэ", 5);
        let response = ctx.api.update_pet_info(&key, &pet.id, &details).await?;
        expect_status("update_pet_info", &response, 200)?;
        expect_field("update_pet_info", &response, "name", &details.name)?;
        Ok::<(), ScenarioError>(())
    }
    .await;

    cleanup_pet(ctx, &key, &pet.id).await;
    result
}

pub(super) async fn delete_own_pet(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let pet = provision_pet(ctx, &key).await?;

    let response = ctx.api.delete_pet(&key, &pet.id).await?;
    if !response.is_success() {
        cleanup_pet(ctx, &key, &pet.id).await;
    }
    expect_status("delete_pet", &response, 200)?;

    let remaining = my_pets(ctx, &key).await?;
    ensure("delete_pet", !remaining.contains_id(&pet.id), || {
        format!("pet {} is still listed after deletion", pet.id)
    })?;
    Ok(())
}

/// Deleting an already deleted pet is a no-op (200) or reports it as missing
/// (404). Either way the pet must stay gone.
pub(super) async fn delete_pet_twice(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let pet = provision_pet(ctx, &key).await?;

    let first = ctx.api.delete_pet(&key, &pet.id).await?;
    if !first.is_success() {
        cleanup_pet(ctx, &key, &pet.id).await;
    }
    expect_status("delete_pet", &first, 200)?;

    let second = ctx.api.delete_pet(&key, &pet.id).await?;
    expect_status_in("delete_pet", &second, &[200, 404])?;

    let remaining = my_pets(ctx, &key).await?;
    ensure("delete_pet", !remaining.contains_id(&pet.id), || {
        format!("pet {} reappeared after a repeated delete", pet.id)
    })?;
    Ok(())
}

pub(super) async fn delete_pet_with_invalid_key(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let pet = provision_pet(ctx, &key).await?;

    let result: ScenarioResult = async {
        let response = ctx.api.delete_pet(&invalid_key(), &pet.id).await?;
        expect_status("delete_pet", &response, 403)?;
        expect_message("delete_pet", &response, AUTH_KEY_REQUIRED)?;

        let remaining = my_pets(ctx, &key).await?;
        ensure("delete_pet", remaining.contains_id(&pet.id), || {
            format!("pet {} vanished after a rejected delete", pet.id)
        })?;
        Ok::<(), ScenarioError>(())
    }
    .await;

    cleanup_pet(ctx, &key, &pet.id).await;
    result
}
