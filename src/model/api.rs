use serde::{Deserialize, Serialize};

/// The body returned when an API request fails
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(default)]
    pub message: Option<String>,
    /// Older endpoints report the message under `error`
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorDto {
    /// The first non-blank message in the body, `message` before `error`
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_string())
            .find(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorDto;

    #[test]
    fn test_into_message_prefers_message() {
        let dto: ErrorDto =
            serde_json::from_str(r#"{"message":"Username already exists","error":"Conflict"}"#)
                .unwrap();

        assert_eq!(dto.into_message().as_deref(), Some("Username already exists"));
    }

    #[test]
    fn test_into_message_falls_back_to_error() {
        let dto: ErrorDto = serde_json::from_str(r#"{"message":"  ","error":"Conflict"}"#).unwrap();

        assert_eq!(dto.into_message().as_deref(), Some("Conflict"));
    }

    #[test]
    fn test_into_message_none() {
        let dto: ErrorDto = serde_json::from_str(r#"{"title":"Bad Request"}"#).unwrap();

        assert_eq!(dto.into_message(), None);
    }
}
