use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One of the five fixed lanes a team must cover exactly once.
///
/// The variant order is the canonical lane order used everywhere a roster is
/// scanned or rendered (assembly pick order, lane-ordered views).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// All five lanes in canonical order.
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Index of this lane within [`Role::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Role::Top => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Adc => 3,
            Role::Support => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Adc => "Adc",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" | "jg" => Ok(Role::Jungle),
            "mid" | "middle" => Ok(Role::Mid),
            "adc" | "bot" | "bottom" => Ok(Role::Adc),
            "support" | "sup" => Ok(Role::Support),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Ranked ladder tier. The derived ordering is the ladder order, ascending
/// from [`Rank::Iron`] to [`Rank::Challenger`]; it is used only for sorting
/// and tie-breaking, never for eligibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Rank {
    /// The full ladder, ascending.
    pub const LADDER: [Rank; 10] = [
        Rank::Iron,
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
        Rank::Emerald,
        Rank::Diamond,
        Rank::Master,
        Rank::Grandmaster,
        Rank::Challenger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Iron => "Iron",
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Emerald => "Emerald",
            Rank::Diamond => "Diamond",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
            Rank::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Win/loss tally carried by players and teams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// A copy with one more game recorded.
    pub fn recorded(self, won: bool) -> Self {
        if won {
            Self { wins: self.wins + 1, ..self }
        } else {
            Self { losses: self.losses + 1, ..self }
        }
    }

    pub fn total(self) -> u32 {
        self.wins + self.losses
    }
}

/// A single game's line for a player. Owned history data; no scoring formula
/// is applied here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecord {
    pub date: DateTime<Utc>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl PerformanceRecord {
    pub fn new(kills: u32, deaths: u32, assists: u32) -> Self {
        Self { date: Utc::now(), kills, deaths, assists }
    }
}

/// A registered player.
///
/// Players are immutable by replacement: every edit goes through a `with_*`
/// builder that returns a new value with `updated_at` refreshed. The canonical
/// copy lives in a [`PlayerPool`](crate::roster::PlayerPool); teams embed
/// copies that the [`ConsistencyCoordinator`](crate::roster::ConsistencyCoordinator)
/// keeps in step with the pool.
///
/// Two equivalence notions exist and are never conflated:
/// - *strong* equality is the derived `PartialEq` over all fields;
/// - *weak* equality ("same player") is [`Player::same_player`], comparing by
///   name only, and is what duplicate detection uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    /// Opaque stable identity. Rostering and exclusivity checks key on this.
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub rank: Rank,
    /// Signature champion. Two members of one team may never share one.
    pub champion: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub record: WinLoss,
    /// Per-game history. Owned here, scored elsewhere.
    #[serde(default)]
    pub history: Vec<PerformanceRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        role: Role,
        rank: Rank,
        champion: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            rank,
            champion: champion.into(),
            tags: BTreeSet::new(),
            record: WinLoss::default(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Weak equality: same player by name, ignoring every other field.
    pub fn same_player(&self, other: &Player) -> bool {
        self.name == other.name
    }

    fn touched(mut self) -> Self {
        self.updated_at = Utc::now();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.touched()
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self.touched()
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self.touched()
    }

    pub fn with_champion(mut self, champion: impl Into<String>) -> Self {
        self.champion = champion.into();
        self.touched()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self.touched()
    }

    /// A copy with one more game on the record.
    pub fn with_result(mut self, won: bool) -> Self {
        self.record = self.record.recorded(won);
        self.touched()
    }

    /// A copy with a game line appended to the history.
    pub fn with_performance(mut self, record: PerformanceRecord) -> Self {
        self.history.push(record);
        self.touched()
    }
}
