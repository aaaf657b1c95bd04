pub mod errors;
pub mod gate;
pub mod role;

pub use errors::AccessError;
pub use errors::RoleError;
pub use gate::authorize;
pub use gate::extract_bearer;
pub use gate::Principal;
pub use role::RequiredRoles;
pub use role::Role;
