pub mod auth;
pub mod logging;

pub use auth::require_token;
pub use logging::log_requests;
