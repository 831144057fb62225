//! Auth domain - username/password accounts and JWT sessions
//!
//! Responsibilities:
//! - Registration with input validation and Argon2 password hashing
//! - Login and token issuance
//! - JWT creation and verification

pub mod actions;
pub mod errors;
pub mod jwt;
pub mod models;
pub mod password;
pub mod types;

pub use actions::{current_user, login, register};
pub use errors::AuthError;
pub use jwt::{Claims, JwtService};
pub use models::{Role, User};
pub use types::{AuthResponse, CurrentUser};
