use async_trait::async_trait;
use derive_more::Display;

pub mod local;

pub use local::LocalMediaStorage;

/// Directory prefix for profile images inside the media backend.
pub const PROFILE_IMAGE_PREFIX: &str = "profiles";

#[derive(Debug, Display)]
pub enum StorageError {
    #[display("Invalid storage key: {_0}")]
    InvalidKey(String),

    #[display("Storage I/O error: {_0}")]
    Io(std::io::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// Backing store for uploaded media, addressed by relative keys such as
/// `profiles/<file>`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub fn profile_image_key(file_name: &str) -> String {
    format!("{PROFILE_IMAGE_PREFIX}/{file_name}")
}
