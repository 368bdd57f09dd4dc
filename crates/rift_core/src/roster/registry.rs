//! The canonical team collection.
//!
//! Owns every registered team and enforces the two cross-entity invariants:
//! no two registered teams share the same roster (weak equality), and no
//! player identity is rostered on more than one team at a time.

use crate::models::player::Player;
use crate::models::team::Team;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("an equivalent team is already registered")]
    DuplicateTeam,

    #[error("player {player} is already rostered on another team")]
    PlayerAlreadyRostered { player: String },

    #[error("team is not registered")]
    TeamNotFound,
}

/// Dependency-injected repository of registered teams. Contents change only
/// through the guarded operations below; every failure leaves the registry
/// observably unchanged.
#[derive(Debug, Clone, Default)]
pub struct RosterRegistry {
    teams: Vec<Team>,
}

impl RosterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team. Fails with [`RegistryError::DuplicateTeam`] if a
    /// weakly-equal team is already present, or with
    /// [`RegistryError::PlayerAlreadyRostered`] (naming the conflicting
    /// player) if any member already belongs to a registered team.
    pub fn add(&mut self, team: Team) -> Result<(), RegistryError> {
        if self.teams.iter().any(|existing| existing.same_roster(&team)) {
            return Err(RegistryError::DuplicateTeam);
        }

        for member in team.players() {
            if self.teams.iter().any(|existing| existing.contains_player(member.id)) {
                return Err(RegistryError::PlayerAlreadyRostered { player: member.name.clone() });
            }
        }

        log::debug!("registered team {}, {} team(s) total", team.id(), self.teams.len() + 1);
        self.teams.push(team);
        Ok(())
    }

    /// Swap a registered team for a new value. `old` must match by strong
    /// equality; `new` may not weakly equal a *different* registered team.
    pub fn replace(&mut self, old: &Team, new: Team) -> Result<(), RegistryError> {
        let index = self
            .teams
            .iter()
            .position(|existing| existing.strong_eq(old))
            .ok_or(RegistryError::TeamNotFound)?;

        if self
            .teams
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_roster(&new))
        {
            return Err(RegistryError::DuplicateTeam);
        }

        self.teams[index] = new;
        Ok(())
    }

    /// Unregister a team. Matches by strong equality only; removal by weak
    /// match is intentionally disallowed so a stale copy cannot knock out the
    /// live one.
    pub fn remove(&mut self, team: &Team) -> Result<Team, RegistryError> {
        let index = self
            .teams
            .iter()
            .position(|existing| existing.strong_eq(team))
            .ok_or(RegistryError::TeamNotFound)?;

        let removed = self.teams.remove(index);
        log::debug!("removed team {}, {} team(s) remain", removed.id(), self.teams.len());
        Ok(removed)
    }

    /// The registered team holding this player's identity, if any.
    pub fn containing_team_of(&self, player: &Player) -> Option<&Team> {
        self.teams.iter().find(|team| team.contains_player(player.id))
    }

    pub fn is_rostered(&self, player: &Player) -> bool {
        self.containing_team_of(player).is_some()
    }

    /// Atomically replace the whole registry contents. The incoming batch is
    /// checked on its own, independent of prior state: two weakly-equal teams
    /// fail with [`RegistryError::DuplicateTeam`], and a player identity
    /// appearing in more than one incoming team fails with
    /// [`RegistryError::PlayerAlreadyRostered`].
    pub fn replace_all(&mut self, teams: Vec<Team>) -> Result<(), RegistryError> {
        for (i, team) in teams.iter().enumerate() {
            for other in &teams[i + 1..] {
                if team.same_roster(other) {
                    return Err(RegistryError::DuplicateTeam);
                }
                if let Some(member) =
                    team.players().iter().find(|p| other.contains_player(p.id))
                {
                    return Err(RegistryError::PlayerAlreadyRostered {
                        player: member.name.clone(),
                    });
                }
            }
        }

        log::debug!("replaced registry contents with {} team(s)", teams.len());
        self.teams = teams;
        Ok(())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
