use super::player::{Player, Role, WinLoss};
use thiserror::Error;
use uuid::Uuid;

/// Fixed roster size: one member per lane.
pub const TEAM_SIZE: usize = 5;

/// Composition errors raised by [`Team`] construction. A `Team` value never
/// escapes half-valid; every derived value re-runs this validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamError {
    #[error("team must have exactly 5 players, found {found}")]
    InvalidRosterSize { found: usize },

    #[error("duplicate role in roster: {role}")]
    DuplicateRole { role: Role },

    #[error("duplicate champion in roster: {champion}")]
    DuplicateChampion { champion: String },
}

/// A team of exactly five players, one per lane, with pairwise-distinct
/// champions.
///
/// Fields are private: the validating constructors are the only way to
/// materialize a `Team`, and any change (member substitution, win/loss
/// increment) produces a new value carrying the same identity.
///
/// Two equivalence notions, both explicitly named so uniqueness checks cannot
/// pick the wrong one by accident:
/// - [`Team::strong_eq`]: same identity and same ordered roster;
/// - [`Team::same_roster`]: same multiset of member identities, regardless
///   of team id or member order.
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    players: Vec<Player>,
    record: WinLoss,
}

impl Team {
    /// Validate and construct a team with a fresh identity and a zero record.
    pub fn new(players: Vec<Player>) -> Result<Team, TeamError> {
        Self::with_id(Uuid::new_v4(), players, WinLoss::default())
    }

    /// Validate and construct a team with an explicit identity, used when
    /// reconstructing from storage or deriving a replacement value.
    pub fn with_id(id: Uuid, players: Vec<Player>, record: WinLoss) -> Result<Team, TeamError> {
        Self::validate_roster(&players)?;
        Ok(Team { id, players, record })
    }

    /// Scans all C(5,2)=10 member pairs in ascending index order; for each
    /// pair the role check runs before the champion check, and the first
    /// violation aborts. The error for a given roster is therefore always the
    /// same one.
    fn validate_roster(players: &[Player]) -> Result<(), TeamError> {
        if players.len() != TEAM_SIZE {
            return Err(TeamError::InvalidRosterSize { found: players.len() });
        }

        for i in 0..players.len() {
            for j in (i + 1)..players.len() {
                if players[i].role == players[j].role {
                    return Err(TeamError::DuplicateRole { role: players[i].role });
                }
                if players[i].champion == players[j].champion {
                    return Err(TeamError::DuplicateChampion {
                        champion: players[i].champion.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Members in construction order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn record(&self) -> WinLoss {
        self.record
    }

    /// Strong equality: same identity and same ordered roster.
    pub fn strong_eq(&self, other: &Team) -> bool {
        self.id == other.id && self.players == other.players
    }

    /// Weak equality: same multiset of member identities, regardless of team
    /// id or member order. Drives duplicate-team detection.
    pub fn same_roster(&self, other: &Team) -> bool {
        let mut ours: Vec<Uuid> = self.players.iter().map(|p| p.id).collect();
        let mut theirs: Vec<Uuid> = other.players.iter().map(|p| p.id).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    pub fn contains_player(&self, id: Uuid) -> bool {
        self.slot_of(id).is_some()
    }

    /// Roster slot of the member with the given identity.
    pub fn slot_of(&self, id: Uuid) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn member_for_role(&self, role: Role) -> Option<&Player> {
        self.players.iter().find(|p| p.role == role)
    }

    /// Members in fixed lane order (Top, Jungle, Mid, Adc, Support),
    /// independent of the roster's internal storage order.
    pub fn lane_ordered(&self) -> Vec<&Player> {
        Role::ALL.iter().filter_map(|role| self.member_for_role(*role)).collect()
    }

    /// A copy with one roster slot substituted, keeping identity and record.
    /// Re-runs full validation, so a substitution that collides on role or
    /// champion is rejected and the original value stays intact.
    ///
    /// # Panics
    /// Panics if `index >= TEAM_SIZE`.
    pub fn with_member_replaced(&self, index: usize, player: Player) -> Result<Team, TeamError> {
        let mut players = self.players.clone();
        players[index] = player;
        Self::with_id(self.id, players, self.record)
    }

    /// A copy with one more game on the record, keeping identity and roster.
    pub fn with_result(&self, won: bool) -> Result<Team, TeamError> {
        Self::with_id(self.id, self.players.clone(), self.record.recorded(won))
    }
}
