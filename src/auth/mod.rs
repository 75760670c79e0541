// Authentication module
// JWT token creation/verification and the verifier port

pub mod jwt;

pub use jwt::{JwtVerifier, TokenVerifier};
