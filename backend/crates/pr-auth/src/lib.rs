pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password_hasher;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password_hasher::Argon2PasswordHasher;
