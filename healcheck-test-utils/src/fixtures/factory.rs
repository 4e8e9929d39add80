//! JSON bodies in the backend's wire format.
//!
//! Factories return `serde_json::Value` so tests can tweak individual fields before handing
//! the body to an [`Endpoint`](crate::Endpoint).

use serde_json::{json, Value};

use crate::constant::{TEST_IMAGE_PATH, TEST_TOKEN};

/// Timestamp used by fixtures that should not count as analysed today.
pub static PAST_TIMESTAMP: &str = "2024-01-15T10:00:00";

/// Creates a user as listed by `GET /users`.
pub fn user(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "createdAt": PAST_TIMESTAMP,
    })
}

/// Creates `count` users with ids starting at 1.
pub fn users(count: i64) -> Vec<Value> {
    (1..=count).map(|id| user(id, &format!("user{}", id))).collect()
}

/// Creates the sparse image entry some list endpoints return: id and owner only.
pub fn image(id: i64, user_id: i64) -> Value {
    json!({
        "id": id,
        "userId": user_id,
    })
}

/// Creates an image with every field the detail view shows.
pub fn complete_image(id: i64, user_id: i64) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "foodName": "Pho",
        "kcal": 420.0,
        "gam": 12.5,
        "aiSuggestion": "Add more vegetables",
        "imagePath": TEST_IMAGE_PATH,
        "createdAt": PAST_TIMESTAMP,
    })
}

/// Creates a complete image whose `createdAt` is the current local time.
pub fn image_created_today(id: i64, user_id: i64) -> Value {
    let mut image = complete_image(id, user_id);
    image["createdAt"] = json!(chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string());
    image
}

/// Creates the response of `POST /images/upload`.
pub fn upload_result(id: i64, user_id: i64) -> Value {
    let mut image = complete_image(id, user_id);
    image["nutrientAnalysis"] = json!([
        { "nutrientName": "Calories", "value": 420.0 },
        { "nutrientName": "Protein", "value": 21.25 },
        { "nutrientName": "Fat", "value": 12.5 },
        { "nutrientName": "Carbohydrate", "value": 55.0 },
    ]);
    image
}

/// Creates the response of `POST /users/login` carrying [`TEST_TOKEN`].
pub fn login_response(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "token": TEST_TOKEN,
    })
}

/// Creates the error body the backend sends with non-2xx responses.
pub fn error_body(message: &str) -> Value {
    json!({ "message": message })
}
