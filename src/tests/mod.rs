// Test modules for the pet-friends crate
//
// Each source file has a corresponding test file that focuses on behaviour
// rather than implementation details. Wire-level tests against a mock HTTP
// server live in the crate's tests/ directory.

// Shared fixtures
pub mod helpers;
