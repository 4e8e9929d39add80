//! Declarative test builder.
//!
//! Endpoints are queued on the builder and registered on a fresh mock server during the final
//! `build()` call, so a test reads as a description of the backend it runs against.

use serde_json::Value;

use crate::{error::TestError, fixtures::endpoint::Endpoint, setup::TestSetup};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```no_run
/// use healcheck_test_utils::prelude::*;
///
/// # async fn example() -> Result<(), TestError> {
/// let test = TestBuilder::new()
///     .with_users_endpoint(factory::users(3), 1)
///     .with_delete_user_endpoint(2, 1)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TestBuilder {
    endpoints: Vec<Endpoint>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary endpoint.
    ///
    /// Custom endpoints are registered in the order they were added.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Add `GET /users` returning `users`, expected `expected_requests` times.
    pub fn with_users_endpoint(self, users: Vec<Value>, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::list_users(users).expect(expected_requests))
    }

    /// Add `GET /images` returning `images`, expected `expected_requests` times.
    pub fn with_images_endpoint(self, images: Vec<Value>, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::list_images(images).expect(expected_requests))
    }

    /// Add `GET /images?userId={user_id}` returning `images`.
    pub fn with_user_images_endpoint(
        self,
        user_id: i64,
        images: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(Endpoint::list_user_images(user_id, images).expect(expected_requests))
    }

    /// Add `GET /images/{id}` returning `body`.
    pub fn with_image_endpoint(self, id: i64, body: Value, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::get_image(id, &body).expect(expected_requests))
    }

    /// Add `POST /users/login` returning `body`.
    pub fn with_login_endpoint(self, body: Value, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::login(&body).expect(expected_requests))
    }

    /// Add `DELETE /users/{id}` answering `204`.
    pub fn with_delete_user_endpoint(self, id: i64, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::delete_user(id).expect(expected_requests))
    }

    /// Add `DELETE /images/{id}` answering `204`.
    pub fn with_delete_image_endpoint(self, id: i64, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::delete_image(id).expect(expected_requests))
    }

    /// Add `POST /images/upload` returning `body`.
    pub fn with_upload_endpoint(self, body: Value, expected_requests: usize) -> Self {
        self.with_endpoint(Endpoint::upload(&body).expect(expected_requests))
    }

    /// Start the mock server and register every queued endpoint.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for endpoint in self.endpoints {
            setup.add_endpoint(endpoint).await;
        }

        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_registers_endpoints() {
        let result = TestBuilder::new()
            .with_users_endpoint(Vec::new(), 0)
            .with_delete_user_endpoint(1, 0)
            .build()
            .await;

        assert!(result.is_ok());
        let setup = result.unwrap();
        assert_eq!(setup.mocks.len(), 2);
        assert!(setup.url().starts_with("http://"));
    }
}
