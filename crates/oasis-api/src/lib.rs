// oasis-api: Async Rust client for the Oasis directory backend + auth service

pub mod auth;
pub mod directory;
pub mod error;
pub mod transport;
pub mod types;

pub use auth::AuthClient;
pub use directory::DirectoryClient;
pub use error::Error;
pub use transport::TransportConfig;
