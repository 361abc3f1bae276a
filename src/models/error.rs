use crate::config::Config;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// The backend answered with an `error` field.
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Text shown to the user in the error panel.
    ///
    /// Backend-reported messages are shown verbatim; every other failure
    /// collapses to the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(msg) => msg.clone(),
            _ => Config::GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
