use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::Config;

/// Shown in place of an image whose record has no path
pub const NO_IMAGE_AVAILABLE: &str = "No image available";
/// Swapped in when a thumbnail fails to load
pub const THUMBNAIL_FALLBACK_LABEL: &str = "No Image";
/// Swapped in when the detail preview fails to load
pub const DETAIL_FALLBACK_LABEL: &str = "Image Not Found";

pub const THUMBNAIL_SIZE: u32 = 100;
pub const DETAIL_SIZE: u32 = 300;

/// Where an image element gets its pixels from
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// Uploaded image served by the backend
    Url(String),
    /// Generated placeholder carrying a label
    Placeholder(&'static str),
}

impl ImageSource {
    /// Resolve an `image_path` against the configured asset host.
    pub fn from_path(image_path: Option<&str>, config: &Config) -> Self {
        match image_path {
            Some(path) => Self::Url(format!("{}{}", config.asset_host, path)),
            None => Self::Placeholder(NO_IMAGE_AVAILABLE),
        }
    }

    /// Value for an `img` element's `src`, rendering placeholders at `size` pixels square.
    pub fn src(&self, size: u32) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Placeholder(label) => placeholder_data_uri(*label, size),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// A grey square SVG with a centered label, as a base64 `data:` URI.
///
/// Labels are the fixed plain-text constants of this module and are not XML-escaped.
pub fn placeholder_data_uri(label: &'static str, size: u32) -> String {
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><rect fill="#ddd" width="{size}" height="{size}"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="#999">{label}</text></svg>"##,
        size = size,
        label = label,
    );

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_path() {
        let config = Config::new("http://localhost:5288/api");

        assert_eq!(
            ImageSource::from_path(Some("/uploads/a.jpg"), &config),
            ImageSource::Url("http://localhost:5288/uploads/a.jpg".to_string())
        );
        assert_eq!(
            ImageSource::from_path(None, &config),
            ImageSource::Placeholder(NO_IMAGE_AVAILABLE)
        );
    }

    #[test]
    fn test_placeholder_uri() {
        let uri = placeholder_data_uri(THUMBNAIL_FALLBACK_LABEL, THUMBNAIL_SIZE);

        let encoded = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("Placeholder should be a base64 SVG data URI");
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();

        assert!(svg.contains(">No Image</text>"));
        assert!(svg.contains(r#"width="100""#));
        assert!(!uri.contains('#'), "Fragments would truncate the URI");
    }
}
