use chrono::Duration;

use crate::access::authorize;
use crate::access::extract_bearer;
use crate::access::AccessError;
use crate::access::Principal;
use crate::access::RequiredRoles;
use crate::access::Role;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenRejection;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token lifetime used unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

/// Authentication coordinator combining password verification, token
/// issuance, and the access gate.
///
/// Built once at startup from the signing secret and never mutated; share it
/// behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with the default token lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Override the lifetime of issued tokens.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier written to the token's `sub`
    /// * `role` - Role written to the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: &Role,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, role)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Refuse a login for an account that does not exist.
    ///
    /// Performs a decoy verification first so the caller cannot tell this
    /// case from a wrong password by timing.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        self.password_hasher.verify_dummy(password);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str, role: &Role) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, role.clone(), self.token_ttl);
        self.jwt_handler.encode(&claims)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `TokenRejection` - Token is malformed, forged, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.jwt_handler.decode(token)
    }

    /// Turn an `Authorization` header value into a principal.
    ///
    /// # Errors
    /// * `MissingToken` - Header absent or not a bearer credential
    /// * `InvalidToken` - Token failed validation
    pub fn authenticate_bearer(&self, header: Option<&str>) -> Result<Principal, AccessError> {
        let token = extract_bearer(header)?;
        let claims = self.validate_token(token)?;

        Ok(Principal {
            subject: claims.sub,
            role: claims.role,
        })
    }

    /// Authenticate a header and enforce a role requirement in one step.
    ///
    /// # Errors
    /// * `MissingToken` / `InvalidToken` - See [`Self::authenticate_bearer`]
    /// * `Forbidden` - Principal's role is not admitted
    pub fn admit(
        &self,
        header: Option<&str>,
        required: &RequiredRoles,
    ) -> Result<Principal, AccessError> {
        let principal = self.authenticate_bearer(header)?;
        authorize(&principal, required)?;
        Ok(principal)
    }
}
