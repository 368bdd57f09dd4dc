//! Greedy team assembly.
//!
//! Groups unassigned players into as many valid five-role teams as the pool
//! allows. The algorithm is greedy and never backtracks: when a pick blocks a
//! later lane, assembly stops with the teams already completed rather than
//! retrying a different combination.

use crate::models::player::{Player, Role};
use crate::models::team::{Team, TeamError, TEAM_SIZE};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssemblyError {
    /// A lane had zero candidates before any assembly was attempted. A
    /// shortfall discovered mid-loop is not an error; it just caps how many
    /// teams come back.
    #[error("no available candidate for role {role}")]
    InsufficientPlayers { role: Role },

    /// Safety net: the final constructor re-validates each assembled roster.
    /// The pick loop already avoids role and champion collisions, so this is
    /// not expected to fire.
    #[error(transparent)]
    Invalid(#[from] TeamError),
}

/// Pure function over a pool of unassigned players. Never touches a registry;
/// callers register the returned teams themselves.
pub struct TeamAssembler;

impl TeamAssembler {
    /// Assemble zero or more valid teams from `unassigned`.
    ///
    /// Candidates are bucketed per lane and stable-sorted by rank descending,
    /// so equal-rank candidates keep their relative input order; that is the
    /// documented tie-break. Each team is then filled in fixed lane order
    /// (Top, Jungle, Mid, Adc, Support), taking the first candidate whose
    /// champion is not already claimed by the team under assembly.
    ///
    /// Deterministic: identical input yields identical team composition and
    /// ordering.
    pub fn assemble(unassigned: &[Player]) -> Result<Vec<Team>, AssemblyError> {
        let mut buckets: [Vec<&Player>; TEAM_SIZE] = Default::default();
        for player in unassigned {
            buckets[player.role.index()].push(player);
        }

        for (role, bucket) in Role::ALL.iter().zip(buckets.iter()) {
            if bucket.is_empty() {
                return Err(AssemblyError::InsufficientPlayers { role: *role });
            }
        }

        for bucket in buckets.iter_mut() {
            bucket.sort_by(|a, b| b.rank.cmp(&a.rank));
        }

        let mut teams = Vec::new();

        'assembly: while buckets.iter().all(|bucket| !bucket.is_empty()) {
            // (bucket, position) per lane; nothing is removed until all five
            // picks succeed, so an abandoned partial selection leaves every
            // candidate where it was.
            let mut picks: Vec<(usize, usize)> = Vec::with_capacity(TEAM_SIZE);
            let mut champions: Vec<String> = Vec::with_capacity(TEAM_SIZE);

            for lane in 0..TEAM_SIZE {
                let found = buckets[lane]
                    .iter()
                    .position(|candidate| !champions.contains(&candidate.champion));
                match found {
                    Some(position) => {
                        champions.push(buckets[lane][position].champion.clone());
                        picks.push((lane, position));
                    }
                    // No conflict-free candidate for this lane: stop
                    // assembling entirely, keeping only completed teams.
                    None => break 'assembly,
                }
            }

            let mut members = Vec::with_capacity(TEAM_SIZE);
            for (lane, position) in picks {
                members.push(buckets[lane].remove(position).clone());
            }

            teams.push(Team::new(members)?);
        }

        log::debug!("assembled {} team(s) from {} unassigned player(s)", teams.len(), unassigned.len());
        Ok(teams)
    }
}
