use thiserror::Error;

/// Failure of a character API request or of the route parameters that drive one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The API answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// The API answered 2xx but the body did not match the expected shape.
    #[error("Failed to parse character data: {0}")]
    Decode(String),
    /// A route parameter required to build the request was absent.
    #[error("Missing required route parameter: {0}")]
    MissingParameter(&'static str),
    /// A route parameter was present but not a valid value.
    #[error("Invalid value for route parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },
}

impl ApiError {
    /// Returns true when the API reported that the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Message shown to users in place of the raw error
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(_) => "Could not reach the multiverse. Check your connection.",
            Self::Http { status: 404, .. } => "Character not found in this dimension.",
            Self::Http { .. } => "The multiverse API returned an error.",
            Self::Decode(_) => "Received unreadable data from the multiverse API.",
            Self::MissingParameter(_) | Self::InvalidParameter { .. } => {
                "No valid character was specified."
            }
        }
    }
}
