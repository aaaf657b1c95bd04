//! Authentication core
//!
//! Provides the security primitives of the account service:
//! - Password hashing (Argon2id)
//! - Session token issuance and validation (HS256 JWT)
//! - Access gate: bearer extraction and role-based authorization
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtHandler, Role};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("user123", Role::user(), Duration::hours(72));
//! let token = handler.encode(&claims).unwrap();
//! assert_eq!(handler.decode(&token).unwrap(), claims);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AccessError, Authenticator, RequiredRoles, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, "user123", &Role::user())
//!     .unwrap();
//!
//! // Protected route: gate on the Authorization header
//! let header = format!("Bearer {}", result.access_token);
//! let principal = auth.admit(Some(header.as_str()), &RequiredRoles::any()).unwrap();
//! assert_eq!(principal.subject, "user123");
//!
//! let admins = RequiredRoles::of([Role::admin()]);
//! assert_eq!(auth.admit(Some(header.as_str()), &admins), Err(AccessError::Forbidden));
//! ```

pub mod access;
pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use access::AccessError;
pub use access::Principal;
pub use access::RequiredRoles;
pub use access::Role;
pub use access::RoleError;
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_TOKEN_TTL_HOURS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenRejection;
pub use password::PasswordError;
pub use password::PasswordHasher;
