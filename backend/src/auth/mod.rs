//! Authentication module
//!
//! JWT access/refresh tokens with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TokenKind};
pub use middleware::AuthUser;
pub use password::{PasswordService, DEFAULT_COST};
