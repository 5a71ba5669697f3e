//! Connection and suite configuration.
//!
//! [`PetFriendsConfig`] holds what the HTTP client needs; [`SuiteConfig`] adds
//! the valid and invalid credentials and the photo directory the scenarios
//! use. Both load from `PET_FRIENDS_*` environment variables.

use crate::core_types::Credentials;
use crate::error::{PetError, PetResult};
use crate::logging::log_debug;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_INVALID_EMAIL: &str = "unknown.user@example.invalid";
pub const DEFAULT_INVALID_PASSWORD: &str = "not-the-password";
pub const DEFAULT_IMAGES_DIR: &str = "tests/images";

/// Connection settings for [`PetFriendsClient`](crate::PetFriendsClient).
#[derive(Debug, Clone, PartialEq)]
pub struct PetFriendsConfig {
    pub base_url: String,
    /// Applied to each request individually. Requests are never retried.
    pub request_timeout: Duration,
}

impl Default for PetFriendsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PetFriendsConfig {
    /// Validate connection settings
    ///
    /// # Errors
    ///
    /// Returns [`PetError::ConfigurationError`] if:
    /// - The base URL is empty or not an http(s) URL
    /// - The request timeout is zero
    pub fn validate(&self) -> PetResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(PetError::configuration_error("Base URL is required"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PetError::configuration_error(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(PetError::configuration_error(
                "Request timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn from_env() -> PetResult<Self> {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("PET_FRIENDS_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(raw) = std::env::var("PET_FRIENDS_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PetError::configuration_error(format!(
                    "PET_FRIENDS_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Everything a scenario run needs besides the client itself.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub api: PetFriendsConfig,
    /// Account the suite logs in with.
    pub valid: Credentials,
    /// Email that is not registered with the service.
    pub invalid_email: String,
    /// Password that does not belong to `valid.email`.
    pub invalid_password: String,
    /// Directory holding the photo fixtures.
    pub images_dir: PathBuf,
}

impl SuiteConfig {
    pub fn new(api: PetFriendsConfig, valid: Credentials) -> Self {
        Self {
            api,
            valid,
            invalid_email: DEFAULT_INVALID_EMAIL.to_string(),
            invalid_password: DEFAULT_INVALID_PASSWORD.to_string(),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }

    pub fn with_images_dir(mut self, images_dir: impl Into<PathBuf>) -> Self {
        self.images_dir = images_dir.into();
        self
    }

    /// Resolve a photo fixture relative to `images_dir`.
    pub fn image(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.images_dir.join(file_name)
    }

    /// Validate suite configuration
    ///
    /// # Errors
    ///
    /// Returns [`PetError::ConfigurationError`] if:
    /// - Connection settings are invalid
    /// - The valid email or password is empty
    /// - An "invalid" credential equals its valid counterpart
    pub fn validate(&self) -> PetResult<()> {
        self.api.validate()?;
        if self.valid.email.trim().is_empty() || self.valid.password.is_empty() {
            return Err(PetError::configuration_error(
                "Valid email and password are required",
            ));
        }
        if self.invalid_email == self.valid.email {
            return Err(PetError::configuration_error(
                "Invalid email must differ from the valid email",
            ));
        }
        if self.invalid_password == self.valid.password {
            return Err(PetError::configuration_error(
                "Invalid password must differ from the valid password",
            ));
        }
        Ok(())
    }

    /// Load suite configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`PetError::ConfigurationError`] if `PET_FRIENDS_EMAIL` or
    /// `PET_FRIENDS_PASSWORD` is missing, or if validation fails.
    pub fn from_env() -> PetResult<Self> {
        let api = PetFriendsConfig::from_env()?;

        let email = std::env::var("PET_FRIENDS_EMAIL")
            .map_err(|_| PetError::configuration_error("PET_FRIENDS_EMAIL is not set"))?;
        let password = std::env::var("PET_FRIENDS_PASSWORD")
            .map_err(|_| PetError::configuration_error("PET_FRIENDS_PASSWORD is not set"))?;

        let mut config = Self::new(api, Credentials::new(email, password));
        if let Ok(invalid_email) = std::env::var("PET_FRIENDS_INVALID_EMAIL") {
            config.invalid_email = invalid_email;
        }
        if let Ok(invalid_password) = std::env::var("PET_FRIENDS_INVALID_PASSWORD") {
            config.invalid_password = invalid_password;
        }
        if let Ok(images_dir) = std::env::var("PET_FRIENDS_IMAGES_DIR") {
            config.images_dir = PathBuf::from(images_dir);
        }

        config.validate()?;

        log_debug!(
            base_url = %config.api.base_url,
            timeout_secs = config.api.request_timeout.as_secs(),
            email = %config.valid.email,
            images_dir = %config.images_dir.display(),
            "PetFriends suite configuration loaded and validated"
        );

        Ok(config)
    }
}
