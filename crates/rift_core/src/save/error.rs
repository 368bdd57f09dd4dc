use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid save slot: {slot}")]
    InvalidSlot { slot: i64 },

    #[error("Save data too large: {size} entries")]
    DataTooLarge { size: usize },

    /// A stored team references a player identity that is not present in the
    /// stored player list.
    #[error("Unknown player referenced by stored team: {id}")]
    UnknownPlayer { id: Uuid },

    /// Stored state fails team or registry validation on reconstruction.
    #[error("Invalid roster state: {0}")]
    InvalidRoster(String),
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            SaveError::VersionMismatch { .. } => true,
            _ => false,
        }
    }
}
