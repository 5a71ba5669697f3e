//! Functional scenarios against the PetFriends API
//!
//! Each scenario is a short linear script: obtain a key, provision its own
//! fixture when it needs one, call the operation under test, assert on the
//! status and payload, then clean up. Scenarios never depend on pets left
//! behind by earlier runs.
//!
//! Scenarios whose correct expectation the service currently violates are
//! labelled [`Expectation::KnownDefect`]; the [`runner`] reports them as
//! expected failures and flags them loudly once the service starts passing.
//!
//! - `assertions` - status/field/message checks producing [`Mismatch`]
//! - `fixtures` - key acquisition, pet provisioning and cleanup
//! - `auth`, `pets`, `defects` - the scenario bodies
//! - `runner` - sequential execution and the aggregated report

pub mod assertions;
mod auth;
mod defects;
pub mod fixtures;
mod pets;
pub mod runner;

use crate::config::SuiteConfig;
use crate::core_types::PetFriendsApi;
use crate::error::PetError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use assertions::Mismatch;
pub use runner::{ScenarioOutcome, ScenarioReport, SuiteReport, SuiteRunner};

/// Client and configuration handed to every scenario.
#[derive(Clone, Copy)]
pub struct ScenarioContext<'a> {
    pub api: &'a dyn PetFriendsApi,
    pub config: &'a SuiteConfig,
}

impl<'a> ScenarioContext<'a> {
    pub fn new(api: &'a dyn PetFriendsApi, config: &'a SuiteConfig) -> Self {
        Self { api, config }
    }
}

/// Why a scenario did not complete cleanly.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// The client could not complete a call.
    #[error(transparent)]
    Api(#[from] PetError),

    /// The service answered, but not as asserted.
    #[error("assertion failed: {0}")]
    Mismatch(#[from] Mismatch),

    /// A setup step (key exchange, fixture) did not succeed.
    #[error("precondition failed: {0}")]
    Precondition(String),
}

pub type ScenarioResult = Result<(), ScenarioError>;

/// What the suite believes about a scenario's assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The service is expected to satisfy the assertions.
    Holds,
    /// The assertions describe correct behaviour the service does not have yet.
    KnownDefect(&'static str),
}

/// Every scenario in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    ApiKeyForValidUser,
    ApiKeyForInvalidPassword,
    ApiKeyForInvalidEmail,
    ApiKeyForInvalidEmailAndPassword,
    ListAllPetsWithValidKey,
    ListPetsWithInvalidKey,
    AddPetWithValidData,
    AddPetWithInvalidKey,
    AddPetWithoutPhoto,
    AddPhotoToOwnPet,
    UpdateOwnPet,
    DeleteOwnPet,
    DeletePetTwice,
    DeletePetWithInvalidKey,
    AddPetWithColonInName,
    AddPetWithNegativeAge,
    AddPetWithDocumentPhoto,
    AddPetWithUnrealisticAge,
    AddPetWithSpecialCharInType,
}

impl ScenarioId {
    /// Catalog order, which is also the default run order.
    pub const ALL: [ScenarioId; 19] = [
        ScenarioId::ApiKeyForValidUser,
        ScenarioId::ApiKeyForInvalidPassword,
        ScenarioId::ApiKeyForInvalidEmail,
        ScenarioId::ApiKeyForInvalidEmailAndPassword,
        ScenarioId::ListAllPetsWithValidKey,
        ScenarioId::ListPetsWithInvalidKey,
        ScenarioId::AddPetWithValidData,
        ScenarioId::AddPetWithInvalidKey,
        ScenarioId::AddPetWithoutPhoto,
        ScenarioId::AddPhotoToOwnPet,
        ScenarioId::UpdateOwnPet,
        ScenarioId::DeleteOwnPet,
        ScenarioId::DeletePetTwice,
        ScenarioId::DeletePetWithInvalidKey,
        ScenarioId::AddPetWithColonInName,
        ScenarioId::AddPetWithNegativeAge,
        ScenarioId::AddPetWithDocumentPhoto,
        ScenarioId::AddPetWithUnrealisticAge,
        ScenarioId::AddPetWithSpecialCharInType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioId::ApiKeyForValidUser => "api_key_for_valid_user",
            ScenarioId::ApiKeyForInvalidPassword => "api_key_for_invalid_password",
            ScenarioId::ApiKeyForInvalidEmail => "api_key_for_invalid_email",
            ScenarioId::ApiKeyForInvalidEmailAndPassword => {
                "api_key_for_invalid_email_and_password"
            }
            ScenarioId::ListAllPetsWithValidKey => "list_all_pets_with_valid_key",
            ScenarioId::ListPetsWithInvalidKey => "list_pets_with_invalid_key",
            ScenarioId::AddPetWithValidData => "add_pet_with_valid_data",
            ScenarioId::AddPetWithInvalidKey => "add_pet_with_invalid_key",
            ScenarioId::AddPetWithoutPhoto => "add_pet_without_photo",
            ScenarioId::AddPhotoToOwnPet => "add_photo_to_own_pet",
            ScenarioId::UpdateOwnPet => "update_own_pet",
            ScenarioId::DeleteOwnPet => "delete_own_pet",
            ScenarioId::DeletePetTwice => "delete_pet_twice",
            ScenarioId::DeletePetWithInvalidKey => "delete_pet_with_invalid_key",
            ScenarioId::AddPetWithColonInName => "add_pet_with_colon_in_name",
            ScenarioId::AddPetWithNegativeAge => "add_pet_with_negative_age",
            ScenarioId::AddPetWithDocumentPhoto => "add_pet_with_document_photo",
            ScenarioId::AddPetWithUnrealisticAge => "add_pet_with_unrealistic_age",
            ScenarioId::AddPetWithSpecialCharInType => "add_pet_with_special_char_in_type",
        }
    }

    pub fn expectation(self) -> Expectation {
        match self {
            ScenarioId::AddPetWithColonInName => {
                Expectation::KnownDefect("service accepts ':' in pet names")
            }
            ScenarioId::AddPetWithNegativeAge => {
                Expectation::KnownDefect("service accepts negative ages")
            }
            ScenarioId::AddPetWithDocumentPhoto => {
                Expectation::KnownDefect("service accepts .docx files as pet photos")
            }
            ScenarioId::AddPetWithUnrealisticAge => {
                Expectation::KnownDefect("service accepts an age of 455")
            }
            ScenarioId::AddPetWithSpecialCharInType => {
                Expectation::KnownDefect("service accepts '@' in animal types")
            }
            _ => Expectation::Holds,
        }
    }

    pub async fn execute(self, ctx: &ScenarioContext<'_>) -> ScenarioResult {
        match self {
            ScenarioId::ApiKeyForValidUser => auth::api_key_for_valid_user(ctx).await,
            ScenarioId::ApiKeyForInvalidPassword => auth::api_key_for_invalid_password(ctx).await,
            ScenarioId::ApiKeyForInvalidEmail => auth::api_key_for_invalid_email(ctx).await,
            ScenarioId::ApiKeyForInvalidEmailAndPassword => {
                auth::api_key_for_invalid_email_and_password(ctx).await
            }
            ScenarioId::ListAllPetsWithValidKey => pets::list_all_pets_with_valid_key(ctx).await,
            ScenarioId::ListPetsWithInvalidKey => pets::list_pets_with_invalid_key(ctx).await,
            ScenarioId::AddPetWithValidData => pets::add_pet_with_valid_data(ctx).await,
            ScenarioId::AddPetWithInvalidKey => pets::add_pet_with_invalid_key(ctx).await,
            ScenarioId::AddPetWithoutPhoto => pets::add_pet_without_photo(ctx).await,
            ScenarioId::AddPhotoToOwnPet => pets::add_photo_to_own_pet(ctx).await,
            ScenarioId::UpdateOwnPet => pets::update_own_pet(ctx).await,
            ScenarioId::DeleteOwnPet => pets::delete_own_pet(ctx).await,
            ScenarioId::DeletePetTwice => pets::delete_pet_twice(ctx).await,
            ScenarioId::DeletePetWithInvalidKey => pets::delete_pet_with_invalid_key(ctx).await,
            ScenarioId::AddPetWithColonInName => defects::add_pet_with_colon_in_name(ctx).await,
            ScenarioId::AddPetWithNegativeAge => defects::add_pet_with_negative_age(ctx).await,
            ScenarioId::AddPetWithDocumentPhoto => {
                defects::add_pet_with_document_photo(ctx).await
            }
            ScenarioId::AddPetWithUnrealisticAge => {
                defects::add_pet_with_unrealistic_age(ctx).await
            }
            ScenarioId::AddPetWithSpecialCharInType => {
                defects::add_pet_with_special_char_in_type(ctx).await
            }
        }
    }
}

impl FromStr for ScenarioId {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| PetError::unknown_scenario(s))
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
