use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Response decode error: {0}")]
    Decode(String),
}

impl BridgeError {
    /// Whether the error indicates an authentication problem rather than a
    /// transport or server fault.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            BridgeError::Unauthorized(_) | BridgeError::Status { status: 401, .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
