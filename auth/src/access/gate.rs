use super::errors::AccessError;
use super::role::RequiredRoles;
use super::role::Role;

/// Authentication scheme expected in the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Identity attached to a request after its token has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub role: Role,
}

/// Pull the token out of an `Authorization` header value.
///
/// The scheme must be exactly `Bearer ` (case-sensitive, single space) and
/// followed by a non-empty token.
///
/// # Errors
/// * `MissingToken` - Header absent, wrong scheme, or empty token
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AccessError> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(AccessError::MissingToken)
}

/// Check a principal against a route's role requirement.
///
/// # Errors
/// * `Forbidden` - Requirement is non-empty and does not contain the role
pub fn authorize(principal: &Principal, required: &RequiredRoles) -> Result<(), AccessError> {
    if required.admits(&principal.role) {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}
