use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed ({status})")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API reported no data for {0}")]
    Unsuccessful(String),
}

impl FetchError {
    pub const GENERIC_MESSAGE: &'static str = "Request failed";

    /// Text shown to the visitor when a booking submission fails.
    ///
    /// The API's own `message` is passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { status, .. } => {
                format!("{} ({status})", Self::GENERIC_MESSAGE)
            }
            Self::Transport(e) => match e.status() {
                Some(status) => format!("{} ({})", Self::GENERIC_MESSAGE, status.as_u16()),
                None => format!("{}: could not reach the booking service", Self::GENERIC_MESSAGE),
            },
            Self::InvalidBaseUrl(_) | Self::Decode(_) | Self::Unsuccessful(_) => {
                Self::GENERIC_MESSAGE.to_string()
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
