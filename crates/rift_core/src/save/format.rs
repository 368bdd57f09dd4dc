use super::error::SaveError;
use super::SAVE_VERSION;
use crate::models::player::Player;
use crate::models::team::Team;
use crate::roster::{PlayerPool, RosterRegistry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// A registered team as stored on disk: member-identity references rather
/// than embedded player values, so a player edit can never leave a stale copy
/// behind in a save file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamRecord {
    pub id: Uuid,
    pub member_ids: Vec<Uuid>,
    pub wins: u32,
    pub losses: u32,
}

/// Snapshot of the whole roster state: the player pool plus every registered
/// team, versioned for migration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterSave {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    pub players: Vec<Player>,

    pub teams: Vec<TeamRecord>,
}

impl RosterSave {
    /// Snapshot live state.
    pub fn capture(pool: &PlayerPool, registry: &RosterRegistry) -> Self {
        let teams = registry
            .teams()
            .iter()
            .map(|team| TeamRecord {
                id: team.id(),
                member_ids: team.players().iter().map(|p| p.id).collect(),
                wins: team.record().wins,
                losses: team.record().losses,
            })
            .collect();

        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            players: pool.iter().cloned().collect(),
            teams,
        }
    }

    /// Rebuild live state. Each stored member reference is resolved against
    /// the restored pool; a dangling reference surfaces
    /// [`SaveError::UnknownPlayer`]. Teams go back through the validating
    /// constructor and the registry's `replace_all`, so a tampered save
    /// cannot smuggle in an invalid roster.
    pub fn restore(&self) -> Result<(PlayerPool, RosterRegistry), SaveError> {
        self.validate()?;

        let pool = PlayerPool::from_players(self.players.clone())
            .map_err(|e| SaveError::InvalidRoster(e.to_string()))?;

        let mut teams = Vec::with_capacity(self.teams.len());
        for record in &self.teams {
            let mut members = Vec::with_capacity(record.member_ids.len());
            for id in &record.member_ids {
                let player =
                    pool.get(*id).ok_or(SaveError::UnknownPlayer { id: *id })?;
                members.push(player.clone());
            }
            let team = Team::with_id(
                record.id,
                members,
                crate::models::player::WinLoss::new(record.wins, record.losses),
            )
            .map_err(|e| SaveError::InvalidRoster(e.to_string()))?;
            teams.push(team);
        }

        let mut registry = RosterRegistry::new();
        registry.replace_all(teams).map_err(|e| SaveError::InvalidRoster(e.to_string()))?;

        Ok((pool, registry))
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.players.len() > 1000 {
            return Err(SaveError::DataTooLarge { size: self.players.len() });
        }

        // Check for duplicate player IDs
        let mut player_ids = std::collections::HashSet::new();
        for player in &self.players {
            if !player_ids.insert(player.id) {
                return Err(SaveError::Corrupted);
            }
        }

        Ok(())
    }
}

/// Serialize and compress a roster snapshot.
pub fn serialize_and_compress(save: &RosterSave) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    save.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a roster snapshot.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<RosterSave, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    // Decompress
    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;

    // Deserialize
    let save: RosterSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    // Validate version
    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{Rank, Role};

    fn populated_state() -> (PlayerPool, RosterRegistry) {
        let roster: Vec<Player> = Role::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| {
                Player::new(format!("Starter{}", i), *role, Rank::Platinum, format!("Champ{}", i))
            })
            .collect();

        let mut pool = PlayerPool::new();
        for p in &roster {
            pool.insert(p.clone()).unwrap();
        }
        pool.insert(Player::new("Bench", Role::Mid, Rank::Silver, "Zed")).unwrap();

        let mut registry = RosterRegistry::new();
        registry.add(Team::new(roster).unwrap()).unwrap();

        (pool, registry)
    }

    #[test]
    fn wire_roundtrip_preserves_contents() {
        let (pool, registry) = populated_state();
        let save = RosterSave::capture(&pool, &registry);

        let bytes = serialize_and_compress(&save).unwrap();
        let decoded = decompress_and_deserialize(&bytes).unwrap();

        assert_eq!(decoded.version, save.version);
        assert_eq!(decoded.players.len(), save.players.len());
        assert_eq!(decoded.teams.len(), 1);
    }

    #[test]
    fn restore_rebuilds_equivalent_state() {
        let (pool, registry) = populated_state();
        let save = RosterSave::capture(&pool, &registry);

        let (restored_pool, restored_registry) = save.restore().unwrap();

        assert_eq!(restored_pool.len(), pool.len());
        assert_eq!(restored_registry.len(), 1);

        let original = &registry.teams()[0];
        let restored = &restored_registry.teams()[0];
        assert!(original.strong_eq(restored));
        assert_eq!(original.record(), restored.record());

        // every member resolves back to the live pool copy
        for member in restored.players() {
            assert_eq!(restored_pool.get(member.id).unwrap(), member);
        }
    }

    #[test]
    fn restore_fails_on_dangling_member_reference() {
        let (pool, registry) = populated_state();
        let mut save = RosterSave::capture(&pool, &registry);

        let ghost = Uuid::new_v4();
        save.teams[0].member_ids[3] = ghost;

        match save.restore() {
            Err(SaveError::UnknownPlayer { id }) => assert_eq!(id, ghost),
            other => panic!("expected UnknownPlayer, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn restore_fails_on_invalid_stored_roster() {
        let (pool, registry) = populated_state();
        let mut save = RosterSave::capture(&pool, &registry);

        // duplicate one member reference: the rebuilt team has a role clash
        save.teams[0].member_ids[1] = save.teams[0].member_ids[0];

        assert!(matches!(save.restore(), Err(SaveError::InvalidRoster(_))));
    }

    #[test]
    fn checksum_corruption_is_detected() {
        let (pool, registry) = populated_state();
        let save = RosterSave::capture(&pool, &registry);
        let mut bytes = serialize_and_compress(&save).unwrap();

        if let Some(last) = bytes.last_mut() {
            *last = last.wrapping_add(1);
        }

        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(SaveError::ChecksumMismatch)
        ));
    }

    #[test]
    fn newer_version_is_refused() {
        let (pool, registry) = populated_state();
        let mut save = RosterSave::capture(&pool, &registry);
        save.version = SAVE_VERSION + 1;

        let bytes = serialize_and_compress(&save).unwrap();
        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(SaveError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn duplicate_player_ids_are_corrupt() {
        let (pool, registry) = populated_state();
        let mut save = RosterSave::capture(&pool, &registry);
        let copy = save.players[0].clone();
        save.players.push(copy);

        assert!(matches!(save.validate(), Err(SaveError::Corrupted)));
    }
}
