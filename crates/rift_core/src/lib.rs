//! # rift_core - Roster Assembly & Referential Integrity Engine
//!
//! This library manages a roster of players for a 5v5 lane-based league game
//! and the teams assembled from them.
//!
//! ## Features
//! - Greedy, deterministic assembly of unassigned players into valid
//!   five-role teams with champion-conflict avoidance
//! - Self-validating `Team` values: exactly 5 members, all roles distinct,
//!   all champions distinct, enforced at every construction
//! - A team registry enforcing roster uniqueness and the player-exclusivity
//!   invariant (a player belongs to at most one registered team)
//! - Coordinated, all-or-nothing propagation of player edits into the team
//!   that embeds them
//! - Versioned, checksummed save files that store teams as member-identity
//!   references and re-resolve them on load

pub mod api;
pub mod models;
pub mod roster;
pub mod save;

// Re-export the core model types
pub use models::player::{PerformanceRecord, Player, Rank, Role, WinLoss};
pub use models::team::{Team, TeamError, TEAM_SIZE};

// Re-export the roster subsystem
pub use roster::{
    AssemblyError, ConsistencyCoordinator, EditError, PlayerPool, PoolError, RegistryError,
    RosterRegistry, TeamAssembler,
};

// Re-export the save system
pub use save::{RosterSave, SaveError, SaveManager, SaveSlotInfo};

// Re-export the display views
pub use api::{team_view_json, PlayerView, TeamView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
