//! Logging utilities for pet-friends
//!
//! Re-exports tracing macros with log_* naming so call sites read the same
//! across the client, the scenarios and the runner binary.

pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};
