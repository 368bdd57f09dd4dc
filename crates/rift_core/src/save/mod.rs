// Save/Load system for roster state
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;

pub use error::SaveError;
pub use format::{
    decompress_and_deserialize, serialize_and_compress, RosterSave, TeamRecord,
};
pub use manager::{SaveManager, SaveSlotInfo};

pub const SAVE_VERSION: u32 = 1;
