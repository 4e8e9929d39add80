//! Wire and domain models shared by the API client, caches and views.
//!
//! `*Dto` types mirror the backend's JSON exactly, including its inconsistent field names.
//! They are converted into canonical records at the API boundary so nothing downstream has to
//! know about aliases.

pub mod api;
pub mod de;
pub mod image;
pub mod stats;
pub mod user;
