use crate::{
    config::Config,
    model::{image::ImageRecord, user::UserRecord},
    view::{format_date, format_number, image::ImageSource, or_not_available, NOT_AVAILABLE},
};

/// One row of the admin users table
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// One row of an images table
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRow {
    pub id: i64,
    pub user_id: String,
    pub food_name: String,
    pub thumbnail: ImageSource,
    pub kcal: String,
    pub created_at: String,
}

pub fn render_users<'a, I>(records: I) -> Vec<UserRow>
where
    I: IntoIterator<Item = &'a UserRecord>,
{
    records
        .into_iter()
        .map(|user| UserRow {
            id: user.id,
            username: user.username.clone(),
            email: or_not_available(user.email.clone()),
            created_at: format_date(user.created_at.as_ref()),
        })
        .collect()
}

/// Project image records into table rows; a missing calorie value shows as `0 kcal`.
pub fn render_images<'a, I>(records: I, config: &Config) -> Vec<ImageRow>
where
    I: IntoIterator<Item = &'a ImageRecord>,
{
    records
        .into_iter()
        .map(|image| ImageRow {
            id: image.id,
            user_id: image
                .user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            food_name: or_not_available(image.food_name.clone()),
            thumbnail: ImageSource::from_path(image.image_path.as_deref(), config),
            kcal: format!("{} kcal", format_number(image.kcal.unwrap_or(0.0))),
            created_at: format_date(image.created_at.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{cache::CollectionCache, util::time::parse_timestamp};

    use super::*;

    fn user(id: i64, email: Option<&str>) -> UserRecord {
        UserRecord {
            id,
            username: format!("user{}", id),
            email: email.map(str::to_string),
            created_at: None,
        }
    }

    fn image(id: i64) -> ImageRecord {
        ImageRecord {
            id,
            user_id: Some(7),
            food_name: None,
            kcal: None,
            gam: None,
            ai_suggestion: None,
            image_path: None,
            created_at: None,
        }
    }

    #[test]
    fn test_user_rows_fallbacks() {
        let rows = render_users(&[user(1, None), user(2, Some("b@example.com"))]);

        assert_eq!(rows[0].email, NOT_AVAILABLE);
        assert_eq!(rows[0].created_at, NOT_AVAILABLE);
        assert_eq!(rows[1].email, "b@example.com");
    }

    #[test]
    /// Expect rows to follow cache order
    fn test_rows_from_cache() {
        let mut cache = CollectionCache::new();
        cache.replace_all(vec![user(3, None), user(1, None), user(2, None)]);

        let ids: Vec<i64> = render_users(&cache).iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_image_rows_fallbacks() {
        let config = Config::default();
        let rows = render_images(&[image(1)], &config);

        assert_eq!(rows[0].food_name, NOT_AVAILABLE);
        assert_eq!(rows[0].kcal, "0 kcal");
        assert_eq!(rows[0].user_id, "7");
        assert!(rows[0].thumbnail.is_placeholder());
    }

    #[test]
    fn test_image_row_values() {
        let config = Config::new("http://localhost:5288/api");
        let mut record = image(2);
        record.food_name = Some("Pho".to_string());
        record.kcal = Some(420.5);
        record.image_path = Some("/uploads/pho.jpg".to_string());
        record.created_at = parse_timestamp("2024-01-15T14:05:09");

        let row = render_images(&[record], &config).remove(0);

        assert_eq!(row.food_name, "Pho");
        assert_eq!(row.kcal, "420.5 kcal");
        assert_eq!(
            row.thumbnail,
            ImageSource::Url("http://localhost:5288/uploads/pho.jpg".to_string())
        );
        assert_eq!(row.created_at, "1/15/2024, 2:05:09 PM");
    }
}
