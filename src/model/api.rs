use serde::{Deserialize, Serialize};

/// The body returned by the character API when a request fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
