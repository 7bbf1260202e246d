//! Authentication Handlers
//!
//! HTTP handlers for the register, login, and current-user endpoints.
//! Request and response shapes live in `shared::types` because the client
//! speaks them too.

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Current user handler
pub mod me;

// Re-export handlers for route configuration
pub use login::login;
pub use me::me;
pub use register::register;
