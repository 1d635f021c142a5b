pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;

pub use claims::{CallerIdentity, Claims};
pub use jwt::JwtService;
pub use middleware::{AccessFilter, AuthenticatedUser};
