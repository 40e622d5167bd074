use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("input '{key}': {message}")]
    BadInput { key: String, message: String },
}

impl HarnessError {
    pub(crate) fn bad_input(key: &str, message: impl Into<String>) -> Self {
        Self::BadInput {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
