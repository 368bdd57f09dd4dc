//! The player repository.
//!
//! Owns the canonical copy of every known player. Explicit and
//! dependency-injected; callers pass it (and the registry) to whatever needs
//! them instead of reaching for a global.

use super::registry::RosterRegistry;
use crate::models::player::Player;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoolError {
    #[error("a player named {name} already exists")]
    DuplicatePlayer { name: String },

    #[error("player {id} is not in the pool")]
    PlayerNotFound { id: Uuid },
}

#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from an already-collected list, rejecting weak (by-name)
    /// duplicates. Used when restoring from storage.
    pub fn from_players(players: Vec<Player>) -> Result<Self, PoolError> {
        let mut pool = Self::new();
        for player in players {
            pool.insert(player)?;
        }
        Ok(pool)
    }

    /// Add a new player. Duplicate detection uses weak equality: a player
    /// with the same name is refused even if every other field differs.
    pub fn insert(&mut self, player: Player) -> Result<(), PoolError> {
        if self.players.iter().any(|existing| existing.same_player(&player)) {
            return Err(PoolError::DuplicatePlayer { name: player.name });
        }
        self.players.push(player);
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Swap in an edited value for the player with the same identity.
    pub fn replace(&mut self, player: Player) -> Result<(), PoolError> {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => {
                *slot = player;
                Ok(())
            }
            None => Err(PoolError::PlayerNotFound { id: player.id }),
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players not currently rostered on any registered team; this is what
    /// the assembler takes as input.
    pub fn unassigned<'a>(&'a self, registry: &RosterRegistry) -> Vec<&'a Player> {
        self.players.iter().filter(|p| !registry.is_rostered(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{Rank, Role};
    use crate::models::team::Team;

    fn sample(name: &str) -> Player {
        Player::new(name, Role::Mid, Rank::Gold, "Ahri")
    }

    #[test]
    fn insert_rejects_same_name() {
        let mut pool = PlayerPool::new();
        pool.insert(sample("Faker")).unwrap();

        let clone = Player::new("Faker", Role::Top, Rank::Iron, "Garen");
        assert_eq!(
            pool.insert(clone),
            Err(PoolError::DuplicatePlayer { name: "Faker".to_string() })
        );
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn replace_swaps_by_identity() {
        let mut pool = PlayerPool::new();
        let player = sample("Faker");
        let id = player.id;
        pool.insert(player.clone()).unwrap();

        let edited = player.with_rank(Rank::Challenger);
        pool.replace(edited).unwrap();
        assert_eq!(pool.get(id).unwrap().rank, Rank::Challenger);

        let stranger = sample("Chovy");
        let stranger_id = stranger.id;
        assert_eq!(
            pool.replace(stranger),
            Err(PoolError::PlayerNotFound { id: stranger_id })
        );
    }

    #[test]
    fn remove_returns_the_player() {
        let mut pool = PlayerPool::new();
        let player = sample("Faker");
        let id = player.id;
        pool.insert(player).unwrap();

        let removed = pool.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(pool.is_empty());
        assert!(pool.remove(id).is_none());
    }

    #[test]
    fn unassigned_excludes_rostered_players() {
        let mut pool = PlayerPool::new();
        let roster: Vec<Player> = Role::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| {
                Player::new(format!("Starter{}", i), *role, Rank::Gold, format!("Champ{}", i))
            })
            .collect();
        for p in &roster {
            pool.insert(p.clone()).unwrap();
        }
        let bench = Player::new("Bench", Role::Mid, Rank::Silver, "Zed");
        pool.insert(bench.clone()).unwrap();

        let mut registry = RosterRegistry::new();
        registry.add(Team::new(roster).unwrap()).unwrap();

        let free = pool.unassigned(&registry);
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].id, bench.id);
    }
}
