pub mod auth;

pub use auth::RegisterRequest;
