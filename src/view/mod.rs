//! Projection of cached records into display-ready views.
//!
//! Views hold final strings: every missing field has already been replaced by its literal
//! fallback, so page components only lay the values out. Image sources are resolved here as
//! well, including the placeholder graphics shown when an image is missing or fails to load.

pub mod analysis;
pub mod detail;
pub mod image;
pub mod table;

use chrono::NaiveDateTime;

use crate::util::time::format_local;

pub use analysis::{render_analysis, AnalysisView};
pub use detail::{render_detail, DetailView, ImageDetail};
pub use image::{
    placeholder_data_uri, ImageSource, DETAIL_FALLBACK_LABEL, DETAIL_SIZE, NO_IMAGE_AVAILABLE,
    THUMBNAIL_FALLBACK_LABEL, THUMBNAIL_SIZE,
};
pub use table::{render_images, render_users, ImageRow, UserRow};

/// Shown for any missing field
pub const NOT_AVAILABLE: &str = "N/A";

pub const NO_USERS_MESSAGE: &str = "No users found";
pub const NO_IMAGES_MESSAGE: &str = "No images found";

/// Format an optional timestamp, or [`NOT_AVAILABLE`]
pub fn format_date(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp
        .map(format_local)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a number the way the page shows it: integers without a decimal point.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
