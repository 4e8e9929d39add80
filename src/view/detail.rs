use crate::{
    config::Config,
    model::image::ImageRecord,
    view::{format_date, format_number, image::ImageSource, or_not_available, NOT_AVAILABLE},
};

pub const NO_SUGGESTION: &str = "No suggestion available";

/// The image detail modal
#[derive(Clone, Debug, PartialEq)]
pub enum ImageDetail {
    /// The image could not be found
    Unavailable,
    Found(DetailView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub id: i64,
    pub user_id: String,
    pub food_name: String,
    pub kcal: String,
    pub gam: String,
    pub created_at: String,
    pub suggestion: String,
    pub image: ImageSource,
}

pub fn render_detail(record: Option<&ImageRecord>, config: &Config) -> ImageDetail {
    let Some(image) = record else {
        return ImageDetail::Unavailable;
    };

    ImageDetail::Found(DetailView {
        id: image.id,
        user_id: image
            .user_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        food_name: or_not_available(image.food_name.clone()),
        kcal: or_not_available(image.kcal.map(format_number)),
        gam: or_not_available(image.gam.map(format_number)),
        created_at: format_date(image.created_at.as_ref()),
        suggestion: image
            .ai_suggestion
            .clone()
            .unwrap_or_else(|| NO_SUGGESTION.to_string()),
        image: ImageSource::from_path(image.image_path.as_deref(), config),
    })
}

#[cfg(test)]
mod tests {
    use crate::view::image::NO_IMAGE_AVAILABLE;

    use super::*;

    #[test]
    fn test_unavailable() {
        assert_eq!(
            render_detail(None, &Config::default()),
            ImageDetail::Unavailable
        );
    }

    #[test]
    /// Expect a sparse record to show the placeholder and per-field fallbacks
    fn test_sparse_record() {
        let record = ImageRecord {
            id: 42,
            user_id: Some(7),
            food_name: None,
            kcal: None,
            gam: None,
            ai_suggestion: None,
            image_path: None,
            created_at: None,
        };

        let ImageDetail::Found(view) = render_detail(Some(&record), &Config::default()) else {
            panic!("Expected a detail view");
        };

        assert_eq!(view.id, 42);
        assert_eq!(view.user_id, "7");
        assert_eq!(view.food_name, NOT_AVAILABLE);
        assert_eq!(view.kcal, NOT_AVAILABLE);
        assert_eq!(view.gam, NOT_AVAILABLE);
        assert_eq!(view.suggestion, NO_SUGGESTION);
        assert_eq!(view.image, ImageSource::Placeholder(NO_IMAGE_AVAILABLE));
    }
}
