pub mod player;
pub mod team;

pub use player::{PerformanceRecord, Player, Rank, Role, WinLoss};
pub use team::{Team, TeamError, TEAM_SIZE};
