//! Test fixtures for mock backend responses.
//!
//! - `factory` - JSON bodies in the backend's wire format
//! - `endpoint` - Mock HTTP endpoint descriptions

pub mod endpoint;
pub mod factory;
