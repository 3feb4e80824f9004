use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid argument: {message}")]
    InvalidArgument { code: &'static str, message: String },
    #[error("internal error")]
    Internal { code: &'static str, message: String },
}

impl AppError {
    pub fn invalid_argument(code: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { code, .. } | Self::Internal { code, .. } => *code,
        }
    }
}
