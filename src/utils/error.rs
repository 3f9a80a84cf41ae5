use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Webhook signature verification failed")]
    InvalidSignature,

    #[error("Malformed webhook payload: {message}")]
    MalformedPayload { message: String },

    #[error("{service} returned {status}: {message}")]
    UpstreamError {
        service: &'static str,
        status: u16,
        message: String,
    },
}

impl BotError {
    /// HTTP status reported to the webhook caller.
    pub fn status_code(&self) -> u16 {
        match self {
            BotError::InvalidSignature => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BotError::InvalidSignature.status_code(), 400);
        assert_eq!(
            BotError::MalformedPayload {
                message: "bad".to_string()
            }
            .status_code(),
            500
        );
        assert_eq!(
            BotError::UpstreamError {
                service: "cotoha-parse",
                status: 429,
                message: "rate limited".to_string(),
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: BotError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert!(matches!(err, BotError::IoError(_)));
        assert_eq!(err.status_code(), 500);
    }
}
