//! Inputs the service should reject with 400 but currently accepts.
//!
//! The assertions state the correct behaviour. The catalog labels these
//! scenarios as known defects, so a mismatch here is an expected failure.
//! Pets the service creates anyway are deleted again.

use super::assertions::expect_status;
use super::fixtures::{acquire_key, cleanup_created, DOCUMENT_PHOTO, HUSKY_PHOTO};
use super::{ScenarioContext, ScenarioResult};
use crate::core_types::{ApiResponse, AuthKey, PetDetails};

pub(super) async fn add_pet_with_colon_in_name(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Ха:рди", "хаски", "4");
    let response = ctx
        .api
        .add_new_pet(&key, &details, &ctx.config.image(HUSKY_PHOTO))
        .await?;

    expect_rejected(ctx, &key, "add_new_pet", &response).await
}

pub(super) async fn add_pet_with_negative_age(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Харди", "хаски", "-4");
    let response = ctx
        .api
        .add_new_pet(&key, &details, &ctx.config.image(HUSKY_PHOTO))
        .await?;

    expect_rejected(ctx, &key, "add_new_pet", &response).await
}

pub(super) async fn add_pet_with_document_photo(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Харди", "хаски", "4");
    let response = ctx
        .api
        .add_new_pet(&key, &details, &ctx.config.image(DOCUMENT_PHOTO))
        .await?;

    expect_rejected(ctx, &key, "add_new_pet", &response).await
}

pub(super) async fn add_pet_with_unrealistic_age(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Тень", "Собака", 455);
    let response = ctx.api.add_new_pet_without_photo(&key, &details).await?;

    expect_rejected(ctx, &key, "add_new_pet_without_photo", &response).await
}

pub(super) async fn add_pet_with_special_char_in_type(
    ctx: &ScenarioContext<'_>,
) -> ScenarioResult {
    let key = acquire_key(ctx).await?;
    let details = PetDetails::new("Тень", "Соб@ка", 4);
    let response = ctx.api.add_new_pet_without_photo(&key, &details).await?;

    expect_rejected(ctx, &key, "add_new_pet_without_photo", &response).await
}

async fn expect_rejected(
    ctx: &ScenarioContext<'_>,
    key: &AuthKey,
    operation: &'static str,
    response: &ApiResponse,
) -> ScenarioResult {
    let verdict = expect_status(operation, response, 400);
    cleanup_created(ctx, key, response).await;
    verdict.map_err(Into::into)
}
