use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{model::de, util::time::parse_timestamp};

/// An analysed image exactly as the backend sends it.
///
/// Different endpoints and backend versions disagree on field names, so every alias seen in
/// the wild has its own slot here and [`ImageDto::into_record`] resolves them in priority
/// order:
/// - fat equivalent: `gam`, then `fat`
/// - suggestion text: `aiSuggestion`, then `ai_suggestion`, then `aiResult`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    #[serde(default, deserialize_with = "de::optional_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::optional_i64")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default, deserialize_with = "de::optional_f64")]
    pub kcal: Option<f64>,
    #[serde(default, deserialize_with = "de::optional_f64")]
    pub gam: Option<f64>,
    #[serde(default, deserialize_with = "de::optional_f64")]
    pub fat: Option<f64>,
    #[serde(default)]
    pub ai_suggestion: Option<String>,
    #[serde(default, rename = "ai_suggestion")]
    pub ai_suggestion_snake: Option<String>,
    #[serde(default)]
    pub ai_result: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub nutrient_analysis: Option<Vec<NutrientDto>>,
}

/// One entry of an upload's `nutrientAnalysis` list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientDto {
    pub nutrient_name: String,
    #[serde(default, deserialize_with = "de::optional_f64")]
    pub value: Option<f64>,
}

/// Canonical image record held by the images cache
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRecord {
    pub id: i64,
    pub user_id: Option<i64>,
    pub food_name: Option<String>,
    pub kcal: Option<f64>,
    /// Fat content in grams
    pub gam: Option<f64>,
    pub ai_suggestion: Option<String>,
    pub image_path: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl ImageRecord {
    /// A record is complete when it can be shown in the detail view without a refetch.
    pub fn is_complete(&self) -> bool {
        self.image_path.is_some() && self.created_at.is_some()
    }
}

/// The result of `POST /images/upload`
#[derive(Clone, Debug, PartialEq)]
pub struct UploadAnalysis {
    pub record: ImageRecord,
    pub nutrients: Vec<NutrientDto>,
}

impl ImageDto {
    /// Resolve aliases into a canonical record.
    ///
    /// Returns `None` when the payload carries no id, since such a record cannot be keyed in a
    /// cache.
    pub fn into_record(self) -> Option<ImageRecord> {
        let id = self.id?;
        Some(self.into_record_with_id(id))
    }

    /// Resolve aliases into a canonical record, using `id` when the payload omits its own.
    pub fn into_record_with_id(self, id: i64) -> ImageRecord {
        ImageRecord {
            id: self.id.unwrap_or(id),
            user_id: self.user_id,
            food_name: non_blank(self.food_name),
            kcal: self.kcal,
            gam: self.gam.or(self.fat),
            ai_suggestion: non_blank(self.ai_suggestion)
                .or_else(|| non_blank(self.ai_suggestion_snake))
                .or_else(|| non_blank(self.ai_result)),
            image_path: non_blank(self.image_path),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
        }
    }

    /// Convert an upload response, keeping the nutrient breakdown
    pub fn into_upload(mut self) -> Option<UploadAnalysis> {
        let nutrients = self.nutrient_analysis.take().unwrap_or_default();
        let record = self.into_record()?;

        Some(UploadAnalysis { record, nutrients })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `GET /images/{id}` returns either the object or a one-element array depending on the
/// backend version.
///
/// `Many` is tried first: a struct whose fields all have defaults would also accept `[]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.into_iter().next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(json: &str) -> ImageDto {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    /// Expect `gam` to win when both `gam` and `fat` are present
    fn test_gam_preferred_over_fat() {
        let record = dto(r#"{"id":1,"gam":12.5,"fat":3.0}"#).into_record().unwrap();

        assert_eq!(record.gam, Some(12.5));
    }

    #[test]
    fn test_fat_used_when_gam_missing() {
        let record = dto(r#"{"id":1,"fat":3.0}"#).into_record().unwrap();

        assert_eq!(record.gam, Some(3.0));
    }

    #[test]
    fn test_suggestion_alias_order() {
        let all = dto(
            r#"{"id":1,"aiSuggestion":"camel","ai_suggestion":"snake","aiResult":"result"}"#,
        );
        let snake_and_result = dto(r#"{"id":1,"ai_suggestion":"snake","aiResult":"result"}"#);
        let result_only = dto(r#"{"id":1,"aiResult":"result"}"#);
        let blank_camel = dto(r#"{"id":1,"aiSuggestion":"","aiResult":"result"}"#);

        assert_eq!(all.into_record().unwrap().ai_suggestion.as_deref(), Some("camel"));
        assert_eq!(
            snake_and_result.into_record().unwrap().ai_suggestion.as_deref(),
            Some("snake")
        );
        assert_eq!(
            result_only.into_record().unwrap().ai_suggestion.as_deref(),
            Some("result")
        );
        assert_eq!(
            blank_camel.into_record().unwrap().ai_suggestion.as_deref(),
            Some("result")
        );
    }

    #[test]
    /// Expect numeric strings to be accepted for numeric fields
    fn test_lenient_numbers() {
        let record = dto(r#"{"id":"9","userId":"7","kcal":"250.5","gam":null}"#)
            .into_record()
            .unwrap();

        assert_eq!(record.id, 9);
        assert_eq!(record.user_id, Some(7));
        assert_eq!(record.kcal, Some(250.5));
        assert_eq!(record.gam, None);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(dto(r#"{"userId":7}"#).into_record().is_none());
    }

    #[test]
    fn test_is_complete() {
        let mut record = dto(r#"{"id":42,"userId":7}"#).into_record().unwrap();
        assert!(!record.is_complete(), "Missing path and date should be incomplete");

        record.image_path = Some("/uploads/42.jpg".to_string());
        assert!(!record.is_complete(), "Missing date should be incomplete");

        record.image_path = None;
        record.created_at = crate::util::time::parse_timestamp("2024-01-15T10:00:00");
        assert!(!record.is_complete(), "Missing path should be incomplete");

        record.image_path = Some("/uploads/42.jpg".to_string());
        assert!(record.is_complete());
    }

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany<ImageDto> = serde_json::from_str(r#"{"id":42}"#).unwrap();
        let many: OneOrMany<ImageDto> = serde_json::from_str(r#"[{"id":42},{"id":43}]"#).unwrap();
        let empty: OneOrMany<ImageDto> = serde_json::from_str("[]").unwrap();

        assert_eq!(one.into_first().unwrap().id, Some(42));
        assert_eq!(many.into_first().unwrap().id, Some(42));
        assert!(empty.into_first().is_none());
    }

    #[test]
    fn test_into_upload_keeps_nutrients() {
        let upload = dto(
            r#"{"id":3,"foodName":"Pho","kcal":420,"nutrientAnalysis":[{"nutrientName":"Protein","value":21.0}]}"#,
        )
        .into_upload()
        .unwrap();

        assert_eq!(upload.record.food_name.as_deref(), Some("Pho"));
        assert_eq!(upload.nutrients.len(), 1);
        assert_eq!(upload.nutrients[0].value, Some(21.0));
    }
}
