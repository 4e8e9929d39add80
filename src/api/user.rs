use dioxus_logger::tracing;
use reqwest::Method;

use crate::{
    api::ApiClient,
    error::Error,
    model::user::{LoginDto, LoginResponseDto, RegisterDto, UpdateUserDto, UserDto, UserRecord},
};

pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    /// Creates a new instance of [`UserApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every user
    pub async fn list(&self) -> Result<Vec<UserRecord>, Error> {
        let users: Vec<UserDto> = self.client.get_json("/users").await?;
        let total = users.len();

        let records: Vec<UserRecord> = users
            .into_iter()
            .filter_map(UserDto::into_record)
            .collect();

        if records.len() != total {
            tracing::warn!(
                "Dropped {} user entries without an id from /users",
                total - records.len()
            );
        }

        Ok(records)
    }

    /// Register a new account.
    ///
    /// Returns the created user when the backend echoes it back; some backend versions answer
    /// with only a confirmation message, in which case `None` is returned.
    pub async fn register(&self, dto: &RegisterDto) -> Result<Option<UserRecord>, Error> {
        let body: Option<serde_json::Value> = self
            .client
            .send_json(Method::POST, "/users/register", dto)
            .await?;

        Ok(body.and_then(|value| match serde_json::from_value::<UserDto>(value) {
            Ok(user) => user.into_record(),
            Err(e) => {
                tracing::debug!("Register response is not a user record: {}", e);
                None
            }
        }))
    }

    /// Exchange credentials for the logged in user and its token
    pub async fn login(&self, dto: &LoginDto) -> Result<LoginResponseDto, Error> {
        self.client
            .send_json(Method::POST, "/users/login", dto)
            .await?
            .ok_or_else(|| Error::InvalidResponse {
                path: "/users/login".to_string(),
                reason: "empty response body".to_string(),
            })
    }

    /// Update a user; returns the updated record when the backend sends one back.
    pub async fn update(&self, id: i64, dto: &UpdateUserDto) -> Result<Option<UserRecord>, Error> {
        let path = format!("/users/{}", id);
        let body: Option<serde_json::Value> =
            self.client.send_json(Method::PUT, &path, dto).await?;

        Ok(body.and_then(|value| {
            serde_json::from_value::<UserDto>(value)
                .ok()
                .map(|user| user.into_record_with_id(id))
        }))
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/users/{}", id)).await
    }
}
