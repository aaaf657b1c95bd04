use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::errors::RoleError;

/// Coarse permission label attached to a user.
///
/// Roles are flat: no role implies another. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Role assigned when registration does not name one.
    pub const DEFAULT: &'static str = "user";
    pub const ADMIN: &'static str = "admin";

    /// Create a validated role.
    ///
    /// # Errors
    /// * `Empty` - Role is an empty string
    /// * `InvalidCharacters` - Role contains whitespace
    pub fn new(role: impl Into<String>) -> Result<Self, RoleError> {
        let role = role.into();
        if role.is_empty() {
            Err(RoleError::Empty)
        } else if role.chars().any(char::is_whitespace) {
            Err(RoleError::InvalidCharacters)
        } else {
            Ok(Self(role))
        }
    }

    pub fn user() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn admin() -> Self {
        Self(Self::ADMIN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::user()
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Set of roles a route accepts.
///
/// An empty set admits every authenticated principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredRoles(BTreeSet<Role>);

impl RequiredRoles {
    /// Admit any authenticated principal.
    pub fn any() -> Self {
        Self::default()
    }

    /// Admit only principals holding one of `roles`.
    pub fn of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a principal with `role` passes this requirement.
    pub fn admits(&self, role: &Role) -> bool {
        self.0.is_empty() || self.0.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_validation() {
        assert_eq!(Role::new("admin").unwrap(), Role::admin());
        assert_eq!(Role::new(""), Err(RoleError::Empty));
        assert_eq!(Role::new("super admin"), Err(RoleError::InvalidCharacters));
        assert_eq!(Role::default().as_str(), "user");
    }

    #[test]
    fn test_role_serde() {
        let role: Role = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(role.as_str(), "auditor");
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"auditor\"");
        assert!(serde_json::from_str::<Role>("\"\"").is_err());
    }

    #[test]
    fn test_empty_requirement_admits_everyone() {
        let required = RequiredRoles::any();
        assert!(required.is_empty());
        assert!(required.admits(&Role::user()));
        assert!(required.admits(&Role::new("auditor").unwrap()));
    }

    #[test]
    fn test_requirement_is_exact_membership() {
        let required = RequiredRoles::of([Role::admin()]);

        assert!(required.admits(&Role::admin()));
        assert!(!required.admits(&Role::user()));
        assert!(!required.admits(&Role::new("Admin").unwrap()));
        assert!(!required.admits(&Role::new("administrator").unwrap()));
    }
}
