use thiserror::Error;

// Domain-level errors for token workflows.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("failed to sign token: {0}")]
    Signing(String),
}
