//! Core types for the PetFriends client
//!
//! - `api` - the [`PetFriendsApi`] trait every scenario is written against
//! - `auth` - credentials and the auth key they are exchanged for
//! - `pet` - pet records, request payloads and list filters
//! - `response` - the uniform `(status, body)` response

pub mod api;
pub mod auth;
pub mod pet;
pub mod response;

#[cfg(test)]
pub use api::MockPetFriendsApi;
pub use api::PetFriendsApi;
pub use auth::{AuthKey, Credentials};
pub use pet::{Pet, PetAge, PetDetails, PetFilter, PetList};
pub use response::{ApiResponse, ResponseBody};
