use crate::config::PetFriendsConfig;
use crate::core_types::{
    ApiResponse, AuthKey, PetDetails, PetFilter, PetFriendsApi, ResponseBody,
};
use crate::error::{PetError, PetResult};
use crate::logging::log_debug;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Url};
use std::path::Path;
use std::time::Instant;

const AUTH_KEY_HEADER: &str = "auth_key";
const PHOTO_FIELD: &str = "pet_photo";

/// HTTP client for the PetFriends REST API
///
/// Construct one per run and pass it to whatever needs it; there is no
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct PetFriendsClient {
    http: reqwest::Client,
    config: PetFriendsConfig,
}

impl PetFriendsClient {
    /// Create a client for the configured base URL
    ///
    /// # Errors
    ///
    /// Returns [`PetError::ConfigurationError`] if the configuration fails
    /// validation or the underlying HTTP client cannot be built.
    pub fn new(config: PetFriendsConfig) -> PetResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                PetError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout.as_secs(),
            "PetFriends client initialized"
        );

        Ok(Self { http, config })
    }

    pub fn from_env() -> PetResult<Self> {
        Self::new(PetFriendsConfig::from_env()?)
    }

    pub fn config(&self) -> &PetFriendsConfig {
        &self.config
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded, so
    /// a pet ID cannot escape its path position.
    fn endpoint(&self, segments: &[&str]) -> PetResult<Url> {
        let mut url = Url::parse(self.config.normalized_base_url()).map_err(|e| {
            PetError::configuration_error(format!("Invalid base URL: {e}"))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                PetError::configuration_error(format!(
                    "Base URL cannot carry a path: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request once and capture status and body, whatever the status.
    async fn dispatch(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> PetResult<ApiResponse> {
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        log_debug!(
            operation = operation,
            status = status,
            duration_ms = started.elapsed().as_millis(),
            body_bytes = raw.len(),
            "PetFriends call completed"
        );

        Ok(ApiResponse::new(status, ResponseBody::from_raw(raw)))
    }

    fn with_details(form: Form, details: &PetDetails) -> Form {
        details
            .form_fields()
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value))
    }
}

/// MIME type announced for an uploaded photo, judged by file extension.
pub fn photo_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

async fn photo_part(photo_path: &Path) -> PetResult<Part> {
    let bytes = tokio::fs::read(photo_path)
        .await
        .map_err(|e| PetError::photo_unavailable(photo_path, e))?;

    let file_name = photo_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| PHOTO_FIELD.to_string());

    log_debug!(
        path = %photo_path.display(),
        bytes = bytes.len(),
        mime = photo_mime_type(photo_path),
        "Attaching pet photo"
    );

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime_type(photo_path))
        .map_err(|e| PetError::request_failed("Invalid photo MIME type", Some(Box::new(e))))
}

#[async_trait]
impl PetFriendsApi for PetFriendsClient {
    async fn get_api_key(&self, email: &str, password: &str) -> PetResult<ApiResponse> {
        let request = self
            .http
            .get(self.endpoint(&["api", "key"])?)
            .header("email", email)
            .header("password", password);

        self.dispatch("get_api_key", request).await
    }

    async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> PetResult<ApiResponse> {
        let request = self
            .http
            .get(self.endpoint(&["api", "pets"])?)
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .query(&[("filter", filter.as_query_value())]);

        self.dispatch("get_list_of_pets", request).await
    }

    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        details: &PetDetails,
        photo_path: &Path,
    ) -> PetResult<ApiResponse> {
        let form = Self::with_details(Form::new(), details)
            .part(PHOTO_FIELD, photo_part(photo_path).await?);

        let request = self
            .http
            .post(self.endpoint(&["api", "pets"])?)
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .multipart(form);

        self.dispatch("add_new_pet", request).await
    }

    async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        details: &PetDetails,
    ) -> PetResult<ApiResponse> {
        let request = self
            .http
            .post(self.endpoint(&["api", "create_pet_simple"])?)
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .form(&details.form_fields());

        self.dispatch("add_new_pet_without_photo", request).await
    }

    async fn add_photo_of_pets(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> PetResult<ApiResponse> {
        let form = Form::new().part(PHOTO_FIELD, photo_part(photo_path).await?);

        let request = self
            .http
            .post(self.endpoint(&["api", "pets", "set_photo", pet_id])?)
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .multipart(form);

        self.dispatch("add_photo_of_pets", request).await
    }

    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        details: &PetDetails,
    ) -> PetResult<ApiResponse> {
        let request = self
            .http
            .put(self.endpoint(&["api", "pets", pet_id])?)
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .form(&details.form_fields());

        self.dispatch("update_pet_info", request).await
    }

    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> PetResult<ApiResponse> {
        let request = self
            .http
            .delete(self.endpoint(&["api", "pets", pet_id])?)
            .header(AUTH_KEY_HEADER, auth_key.as_str());

        self.dispatch("delete_pet", request).await
    }
}
