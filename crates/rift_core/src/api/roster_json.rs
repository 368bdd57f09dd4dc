//! JSON views for the display layer.
//!
//! Read-only renderings of roster state for UI and reporting integrations.
//! A team view always lists its members in lane order (Top, Jungle, Mid,
//! Adc, Support), whatever order the roster is stored in.

use crate::models::player::{Player, Rank, Role};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub rank: Rank,
    pub champion: String,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerView {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            role: player.role,
            rank: player.rank,
            champion: player.champion.clone(),
            wins: player.record.wins,
            losses: player.record.losses,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamView {
    pub schema_version: String,
    pub id: Uuid,
    pub wins: u32,
    pub losses: u32,
    /// Members in lane order, independent of internal storage order.
    pub roster: Vec<PlayerView>,
}

impl TeamView {
    pub fn from_team(team: &Team) -> Self {
        Self {
            schema_version: API_VERSION.to_string(),
            id: team.id(),
            wins: team.record().wins,
            losses: team.record().losses,
            roster: team.lane_ordered().into_iter().map(PlayerView::from_player).collect(),
        }
    }
}

/// Render one team as a JSON document.
pub fn team_view_json(team: &Team) -> Result<String, serde_json::Error> {
    serde_json::to_string(&TeamView::from_team(team))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::WinLoss;

    fn team() -> Team {
        let mut roster: Vec<Player> = Role::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| {
                Player::new(format!("Starter{}", i), *role, Rank::Gold, format!("Champ{}", i))
            })
            .collect();
        // store out of lane order on purpose
        roster.reverse();
        Team::new(roster).unwrap()
    }

    #[test]
    fn view_is_lane_ordered() {
        let view = TeamView::from_team(&team());

        let roles: Vec<Role> = view.roster.iter().map(|p| p.role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
        assert_eq!(view.schema_version, API_VERSION);
    }

    #[test]
    fn json_rendering_round_trips() {
        let team = team();
        let json = team_view_json(&team).unwrap();

        let parsed: TeamView = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, team.id());
        assert_eq!(parsed.roster.len(), 5);
        assert_eq!(parsed.roster[0].role, Role::Top);
    }

    #[test]
    fn view_carries_records() {
        let team = team().with_result(true).unwrap();
        let view = TeamView::from_team(&team);

        assert_eq!((view.wins, view.losses), (1, 0));
        assert_eq!(team.record(), WinLoss::new(1, 0));
    }
}
