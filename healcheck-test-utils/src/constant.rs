//! Fixed values shared by fixtures and assertions.
//!
//! None of these are real credentials.

/// Id of the user every default fixture belongs to.
pub static TEST_USER_ID: i64 = 7;

/// Username that passes login validation.
pub static TEST_USERNAME: &str = "alice";

/// Password that passes login validation.
pub static TEST_PASSWORD: &str = "secret123";

/// Bearer token issued by the mock login endpoint.
pub static TEST_TOKEN: &str = "test_token_abc123";

/// Upload path the image fixtures point at.
pub static TEST_IMAGE_PATH: &str = "/uploads/meal.jpg";
