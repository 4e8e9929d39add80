use crate::{
    config::Config,
    model::image::{NutrientDto, UploadAnalysis},
    view::{format_date, image::ImageSource, or_not_available},
};

pub const NO_SUGGESTION_YET: &str = "No suggestion available at this time.";

/// Result card shown after an upload
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisView {
    pub id: i64,
    pub food_name: String,
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub suggestion: String,
    pub created_at: String,
    pub image: ImageSource,
}

/// Render an upload result.
///
/// Nutrient names are matched case-insensitively. Calories fall back to the record's `kcal`
/// when the breakdown has no calorie entry. Values show one decimal.
pub fn render_analysis(upload: &UploadAnalysis, config: &Config) -> AnalysisView {
    let record = &upload.record;
    let nutrient = |name: &str| find_nutrient(&upload.nutrients, name);

    AnalysisView {
        id: record.id,
        food_name: or_not_available(record.food_name.clone()),
        calories: or_not_available(nutrient("calories").or(record.kcal).map(one_decimal)),
        protein: or_not_available(nutrient("protein").map(one_decimal)),
        fat: or_not_available(nutrient("fat").map(one_decimal)),
        carbs: or_not_available(nutrient("carbohydrate").map(one_decimal)),
        suggestion: record
            .ai_suggestion
            .clone()
            .unwrap_or_else(|| NO_SUGGESTION_YET.to_string()),
        created_at: format_date(record.created_at.as_ref()),
        image: ImageSource::from_path(record.image_path.as_deref(), config),
    }
}

fn find_nutrient(nutrients: &[NutrientDto], name: &str) -> Option<f64> {
    nutrients
        .iter()
        .find(|n| n.nutrient_name.trim().eq_ignore_ascii_case(name))
        .and_then(|n| n.value)
}

fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}
