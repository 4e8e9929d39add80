//! Mock HTTP endpoint descriptions.
//!
//! An [`Endpoint`] is plain data until it is registered on a mockito server, which lets
//! [`TestBuilder`](crate::TestBuilder) queue endpoints before the server exists and register
//! them all during `build()`.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

/// A mock backend endpoint.
#[derive(Debug)]
pub struct Endpoint {
    method: &'static str,
    path: String,
    query: Option<Matcher>,
    bearer: Option<String>,
    status: usize,
    body: Option<String>,
    expected_requests: usize,
}

impl Endpoint {
    /// Create an endpoint answering `200` with an empty body, expected to be called once.
    pub fn new(method: &'static str, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: None,
            bearer: None,
            status: 200,
            body: None,
            expected_requests: 1,
        }
    }

    /// `GET /users`
    pub fn list_users(users: Vec<Value>) -> Self {
        Self::new("GET", "/users").json(&Value::Array(users))
    }

    /// `GET /images` without a user filter
    pub fn list_images(images: Vec<Value>) -> Self {
        Self::new("GET", "/images")
            .query(Matcher::Missing)
            .json(&Value::Array(images))
    }

    /// `GET /images?userId={user_id}`
    pub fn list_user_images(user_id: i64, images: Vec<Value>) -> Self {
        Self::new("GET", "/images")
            .query(Matcher::UrlEncoded("userId".into(), user_id.to_string()))
            .json(&Value::Array(images))
    }

    /// `GET /images/{id}`
    pub fn get_image(id: i64, body: &Value) -> Self {
        Self::new("GET", &format!("/images/{}", id)).json(body)
    }

    /// `POST /users/login`
    pub fn login(body: &Value) -> Self {
        Self::new("POST", "/users/login").json(body)
    }

    /// `POST /users/register`
    pub fn register(body: &Value) -> Self {
        Self::new("POST", "/users/register").json(body)
    }

    /// `PUT /users/{id}`
    pub fn update_user(id: i64, body: &Value) -> Self {
        Self::new("PUT", &format!("/users/{}", id)).json(body)
    }

    /// `DELETE /users/{id}` answering `204 No Content`
    pub fn delete_user(id: i64) -> Self {
        Self::new("DELETE", &format!("/users/{}", id)).status(204)
    }

    /// `DELETE /images/{id}` answering `204 No Content`
    pub fn delete_image(id: i64) -> Self {
        Self::new("DELETE", &format!("/images/{}", id)).status(204)
    }

    /// `POST /images/upload`
    pub fn upload(body: &Value) -> Self {
        Self::new("POST", "/images/upload").json(body)
    }

    pub fn status(mut self, status: usize) -> Self {
        self.status = status;
        self
    }

    /// Respond with a JSON body
    pub fn json(mut self, body: &Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Respond with a raw body, e.g. malformed JSON
    pub fn raw_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn query(mut self, matcher: Matcher) -> Self {
        self.query = Some(matcher);
        self
    }

    /// Only match requests carrying `Authorization: Bearer {token}`
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    /// Number of times this endpoint should be called
    pub fn expect(mut self, expected_requests: usize) -> Self {
        self.expected_requests = expected_requests;
        self
    }

    /// Mount the endpoint on the mock server.
    pub async fn mount(self, server: &mut ServerGuard) -> Mock {
        let mut mock = server
            .mock(self.method, self.path.as_str())
            .with_status(self.status)
            .expect(self.expected_requests);

        if let Some(query) = self.query {
            mock = mock.match_query(query);
        }

        if let Some(token) = self.bearer {
            let header = format!("Bearer {}", token);
            mock = mock.match_header("authorization", header.as_str());
        }

        if let Some(body) = self.body {
            mock = mock
                .with_header("content-type", "application/json")
                .with_body(body);
        }

        mock.create_async().await
    }
}
