use thiserror::Error;

#[derive(Error, Debug)]
pub enum WingupError {
    #[error("Package manager not available: {0}")]
    ToolUnavailable(String),

    #[error("Listing upgrades failed: {0}")]
    Listing(String),

    #[error("Upgrade failed: {0}")]
    UpgradeInvocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WingupError>;
