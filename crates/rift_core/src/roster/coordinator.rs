//! Edit propagation between the player pool and the team registry.
//!
//! A rostered player exists in two places: the canonical copy in the pool and
//! the embedded copy inside its team. Every edit of a rostered player must
//! land in both, or in neither. The coordinator stages and validates the full
//! outcome before touching either store, so a rejected edit leaves prior
//! state intact and a committed edit is observed as one indivisible step.

use super::pool::{PlayerPool, PoolError};
use super::registry::{RegistryError, RosterRegistry};
use crate::models::player::Player;
use crate::models::team::{Team, TeamError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub struct ConsistencyCoordinator<'a> {
    pool: &'a mut PlayerPool,
    registry: &'a mut RosterRegistry,
}

impl<'a> ConsistencyCoordinator<'a> {
    pub fn new(pool: &'a mut PlayerPool, registry: &'a mut RosterRegistry) -> Self {
        Self { pool, registry }
    }

    /// Apply an edited player value to the pool and, if the player is
    /// rostered, to the containing team's matching slot.
    ///
    /// The candidate team is rebuilt through full validation first: a
    /// stats-only edit always passes, while a role or champion change that
    /// now collides with a teammate fails with `DuplicateRole` /
    /// `DuplicateChampion`, and then nothing is applied at all.
    pub fn apply_edit(&mut self, edited: Player) -> Result<(), EditError> {
        if self.pool.get(edited.id).is_none() {
            return Err(PoolError::PlayerNotFound { id: edited.id }.into());
        }

        let staged: Option<(Team, usize)> = self
            .registry
            .containing_team_of(&edited)
            .and_then(|team| team.slot_of(edited.id).map(|slot| (team.clone(), slot)));

        // Every fallible check runs above this line; the two store updates
        // below cannot fail once the candidate validates.
        if let Some((stale, slot)) = staged {
            let candidate = stale.with_member_replaced(slot, edited.clone())?;
            self.registry.replace(&stale, candidate)?;
            log::debug!("propagated edit of player {} into team {}", edited.id, stale.id());
        }

        self.pool.replace(edited)?;
        Ok(())
    }

    /// Record a finished game for a registered team: the team's record and
    /// every member's record are incremented together, in the registry and in
    /// the pool, as one step.
    pub fn record_team_result(&mut self, team: &Team, won: bool) -> Result<(), EditError> {
        if !self.registry.teams().iter().any(|t| t.strong_eq(team)) {
            return Err(RegistryError::TeamNotFound.into());
        }
        for member in team.players() {
            if self.pool.get(member.id).is_none() {
                return Err(PoolError::PlayerNotFound { id: member.id }.into());
            }
        }

        let members: Vec<Player> =
            team.players().iter().map(|p| p.clone().with_result(won)).collect();
        let candidate = Team::with_id(team.id(), members, team.record().recorded(won))?;

        self.registry.replace(team, candidate.clone())?;
        for member in candidate.players() {
            self.pool.replace(member.clone())?;
        }

        log::info!(
            "recorded {} for team {} ({}-{})",
            if won { "win" } else { "loss" },
            candidate.id(),
            candidate.record().wins,
            candidate.record().losses,
        );
        Ok(())
    }
}
