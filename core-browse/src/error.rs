use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("No user session attached")]
    SessionMissing,

    #[error("API error: {0}")]
    Api(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, BrowseError>;
