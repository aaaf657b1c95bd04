use thiserror::Error;

use crate::jwt::TokenRejection;

/// Error for Role validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role must not be empty")]
    Empty,

    #[error("Role must not contain whitespace")]
    InvalidCharacters,
}

/// Rejection produced by the access gate.
///
/// Each variant maps to a distinct response so a client can tell
/// "not logged in" from "logged in but not permitted".
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenRejection),

    #[error("Forbidden: insufficient permissions")]
    Forbidden,
}
