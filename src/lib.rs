//! Core modules of the HealCheck portal.
//!
//! This crate contains everything the HealCheck web pages need apart from the DOM itself:
//! persisted session state, a REST client for the analysis backend, local collection caches
//! that mirror server lists between related views, the view renderer that turns records into
//! display rows, and one controller per page that sequences those pieces. The Dioxus client in
//! the binary only wires controllers to components.

pub mod api;
pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod session;
pub mod util;
pub mod validation;
pub mod view;
