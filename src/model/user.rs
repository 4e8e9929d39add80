use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{model::de, util::time::parse_timestamp};

/// A user as returned by `GET /users`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, deserialize_with = "de::optional_i64")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Canonical user record held by the users cache
#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl UserDto {
    /// Normalize into a cache record; `None` when the payload carries no usable id.
    pub fn into_record(self) -> Option<UserRecord> {
        let id = self.id?;
        Some(self.into_record_with_id(id))
    }

    /// Normalize into a cache record, using `id` when the payload omits its own.
    pub fn into_record_with_id(self, id: i64) -> UserRecord {
        UserRecord {
            id: self.id.unwrap_or(id),
            username: self.username,
            email: self.email.filter(|e| !e.trim().is_empty()),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Body of `POST /users/register`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    /// Sent as `null` when not provided
    pub email: Option<String>,
}

/// Body of `POST /users/login`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Body of `PUT /users/{id}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub username: String,
    pub email: Option<String>,
    /// Only sent when the administrator sets a new password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Response of `POST /users/login`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_user_record_from_dto() {
        let dto: UserDto = serde_json::from_str(
            r#"{"id":5,"username":"alice","email":"","createdAt":"2024-03-01T08:30:00"}"#,
        )
        .unwrap();

        let record = dto.into_record().unwrap();

        assert_eq!(record.id, 5);
        assert_eq!(record.username, "alice");
        assert_eq!(record.email, None, "Blank email should normalize to None");
        assert_eq!(
            record.created_at,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 30, 0)
        );
    }

    #[test]
    fn test_user_id_leniency() {
        let dto: UserDto = serde_json::from_str(r#"{"id":"3","username":"bob"}"#).unwrap();
        assert_eq!(dto.into_record().map(|r| r.id), Some(3));

        let dto: UserDto = serde_json::from_str(r#"{"id":null,"username":"bob"}"#).unwrap();
        assert_eq!(dto.into_record(), None);

        let dto: UserDto = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(dto.into_record_with_id(8).id, 8);
    }

    #[test]
    fn test_update_dto_omits_missing_password() {
        let dto = UpdateUserDto {
            username: "alice".to_string(),
            email: None,
            password: None,
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json, serde_json::json!({"username": "alice", "email": null}));
    }

    #[test]
    fn test_login_response_without_token() {
        let dto: LoginResponseDto = serde_json::from_str(r#"{"id":1,"username":"bob"}"#).unwrap();

        assert!(dto.token.is_none());
    }
}
