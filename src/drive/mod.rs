pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use client::DriveClient;
pub use error::DriveError;
pub use types::DriveFile;
