use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Reason a presented token was refused.
///
/// Validation never fails with anything else: every problem with a token
/// collapses into one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("Token or its claims could not be parsed")]
    MalformedClaims,

    #[error("Token is not signed with the expected algorithm")]
    AlgorithmMismatch,

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    BadSignature,
}
