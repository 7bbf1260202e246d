//! Authentication Module
//!
//! Credential service plus the HTTP handlers that use it: bcrypt password
//! hashing, JWT session tokens, and the register/login/me endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── passwords.rs - bcrypt hashing and verification
//! ├── sessions.rs  - JWT token issue and verify
//! └── handlers/    - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → password hashed → user created →
//!    token returned
//! 2. **Login**: email + password → credentials verified → token returned
//! 3. **Me**: bearer token → identity verified by middleware → user returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; a per-call salt means
//!   two hashes of the same password differ
//! - Tokens are stateless JWTs with a one-hour expiry
//! - Unknown email and wrong password produce the same error (no user
//!   enumeration)

/// bcrypt hashing and verification
pub mod passwords;

/// JWT token issue and verify
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used handlers
pub use handlers::{login, me, register};
