//! Shared test setup for the HealCheck portal.
//!
//! Tests stand up a mockito server in place of the HealCheck backend, register the endpoints
//! a scenario needs through [`TestBuilder`] (or directly on [`TestSetup`]) and point the portal
//! configuration at [`TestSetup::url`]. JSON bodies come from the factories in
//! [`fixtures::factory`] so every test speaks the same wire format.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use fixtures::endpoint::Endpoint;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::factory, Endpoint, TestBuilder, TestError, TestSetup,
    };
}
