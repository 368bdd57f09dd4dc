pub mod roster_json;

pub use roster_json::{team_view_json, PlayerView, TeamView, API_VERSION};
