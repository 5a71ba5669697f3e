//! Key exchange scenarios.
//!
//! Invalid email and invalid password are independent boundary cases; the
//! combination of both gets its own scenario.

use super::assertions::{expect_message, expect_non_empty_field, expect_status, USER_NOT_FOUND};
use super::{ScenarioContext, ScenarioResult};

const OPERATION: &str = "get_api_key";

pub(super) async fn api_key_for_valid_user(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let credentials = &ctx.config.valid;
    let response = ctx
        .api
        .get_api_key(&credentials.email, &credentials.password)
        .await?;

    expect_status(OPERATION, &response, 200)?;
    expect_non_empty_field(OPERATION, &response, "key")?;
    Ok(())
}

pub(super) async fn api_key_for_invalid_password(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let config = ctx.config;
    rejected_key_exchange(ctx, &config.valid.email, &config.invalid_password).await
}

pub(super) async fn api_key_for_invalid_email(ctx: &ScenarioContext<'_>) -> ScenarioResult {
    let config = ctx.config;
    rejected_key_exchange(ctx, &config.invalid_email, &config.valid.password).await
}

pub(super) async fn api_key_for_invalid_email_and_password(
    ctx: &ScenarioContext<'_>,
) -> ScenarioResult {
    let config = ctx.config;
    rejected_key_exchange(ctx, &config.invalid_email, &config.invalid_password).await
}

async fn rejected_key_exchange(
    ctx: &ScenarioContext<'_>,
    email: &str,
    password: &str,
) -> ScenarioResult {
    let response = ctx.api.get_api_key(email, password).await?;

    expect_status(OPERATION, &response, 403)?;
    expect_message(OPERATION, &response, USER_NOT_FOUND)?;
    Ok(())
}
