use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Error envelope returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    /// HTTP status code, repeated in the body.
    pub error: u16,
    pub message: String,
}

impl ErrorDto {
    /// Builds the fixed envelope for a status code.
    ///
    /// Messages are fixed per code; anything outside 400/404/422 is reported as an
    /// internal server error.
    pub fn new(code: u16) -> Self {
        let message = match code {
            400 => "Bad request",
            404 => "Resource not found",
            422 => "Unprocessable entity",
            _ => "Internal server error",
        };

        Self {
            success: false,
            error: code,
            message: message.to_string(),
        }
    }
}

/// Deserializes a field so that an explicit `null` is kept as `Some(Value::Null)`.
///
/// Combined with `#[serde(default)]` this separates an absent key (`None`) from a key
/// present with a null value.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
