pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use errors::JwtError;
pub use errors::TokenRejection;
pub use handler::JwtHandler;
