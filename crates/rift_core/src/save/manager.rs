use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, RosterSave};

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Slot-based persistence for roster snapshots, rooted at a caller-supplied
/// directory. Writes are atomic: temp file, flush, fsync, rename.
pub struct SaveManager {
    root: PathBuf,
}

impl SaveManager {
    pub const SLOT_COUNT: u8 = 3;

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Save a snapshot to a specific slot.
    pub fn save_slot(&self, slot: u8, save: &RosterSave) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        self.save_to_path(&path, save)?;

        log::info!("Roster saved to slot {}", slot);
        Ok(())
    }

    /// Load a snapshot from a specific slot.
    pub fn load_slot(&self, slot: u8) -> Result<RosterSave, SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        let save = self.load_from_path(&path)?;

        log::info!("Roster loaded from slot {}", slot);
        Ok(save)
    }

    pub fn auto_save(&self, save: &RosterSave) -> Result<(), SaveError> {
        let path = self.auto_save_path();
        self.save_to_path(&path, save)?;

        log::debug!("Auto-save completed");
        Ok(())
    }

    pub fn load_auto_save(&self) -> Result<RosterSave, SaveError> {
        let path = self.auto_save_path();
        let save = self.load_from_path(&path)?;

        log::info!("Auto-save loaded");
        Ok(save)
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        if Self::validate_slot(slot).is_err() {
            return false;
        }
        self.slot_path(slot).exists()
    }

    pub fn auto_save_exists(&self) -> bool {
        self.auto_save_path().exists()
    }

    pub fn delete_slot(&self, slot: u8) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted save slot {}", slot);
        }

        Ok(())
    }

    /// Slot metadata for UI display, or `None` for an empty slot.
    pub fn slot_info(&self, slot: u8) -> Result<Option<SaveSlotInfo>, SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let save = self.load_from_path(&path)?;

        Ok(Some(SaveSlotInfo {
            slot,
            timestamp: save.timestamp,
            version: save.version,
            player_count: save.players.len(),
            team_count: save.teams.len(),
        }))
    }

    pub fn all_slot_info(&self) -> Vec<SaveSlotInfo> {
        let mut slots = Vec::new();

        for slot in 0..Self::SLOT_COUNT {
            if let Ok(Some(info)) = self.slot_info(slot) {
                slots.push(info);
            }
        }

        slots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)); // Most recent first
        slots
    }

    // Private helper methods

    fn validate_slot(slot: u8) -> Result<(), SaveError> {
        if slot >= Self::SLOT_COUNT {
            return Err(SaveError::InvalidSlot { slot: slot as i64 });
        }
        Ok(())
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.root.join(format!("roster_slot_{}.dat", slot))
    }

    fn auto_save_path(&self) -> PathBuf {
        self.root.join("auto_save.dat")
    }

    fn save_to_path(&self, path: &Path, save: &RosterSave) -> Result<(), SaveError> {
        // Ensure save directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(save)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(&self, path: &Path) -> Result<RosterSave, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let save = decompress_and_deserialize(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(save)
    }
}

#[derive(Debug, Clone)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub timestamp: u64,
    pub version: u32,
    pub player_count: usize,
    pub team_count: usize,
}

impl SaveSlotInfo {
    pub fn format_timestamp(&self) -> String {
        use time::{format_description::well_known::Rfc3339, OffsetDateTime};

        let timestamp =
            OffsetDateTime::from_unix_timestamp_nanos((self.timestamp * 1_000_000) as i128)
                .unwrap_or_else(|_| OffsetDateTime::now_utc());

        timestamp.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string())
    }

    pub fn display_text(&self) -> String {
        format!(
            "Slot {}: {} players, {} teams",
            self.slot, self.player_count, self.team_count
        )
    }
}
