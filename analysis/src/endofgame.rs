use common::{MatchOverview, RosterPlayer, Side};
use serde_json::Value;

use crate::coerce;
use crate::input::{self, Match};
use crate::operator;
use crate::teams::TeamBinding;

pub fn parse(buf: &[u8]) -> Result<MatchOverview, crate::Error> {
    let m = Match::parse(buf)?;
    Ok(overview(&m))
}

/// Header data and per side rosters of a match.
#[tracing::instrument(skip_all, fields(match_id = %m.match_id()))]
pub fn overview(m: &Match) -> MatchOverview {
    let players = m.players();
    let binding = TeamBinding::from_players(players, input::PLAYER_TEAM_KEYS);

    let mut side_a = Vec::new();
    let mut side_b = Vec::new();
    let mut unassigned = Vec::new();

    for player in players {
        let entry = roster_player(player);
        match binding.resolve_team_color(&entry.team) {
            Some(Side::A) => side_a.push(entry),
            Some(Side::B) => side_b.push(entry),
            None => unassigned.push(entry),
        };
    }

    if !unassigned.is_empty() {
        tracing::debug!(count = unassigned.len(), "Players without a side");
    }

    MatchOverview {
        match_id: m.match_id(),
        map: m.map(),
        mode: m.mode(),
        date: m.date(),
        score_team_a: m.score_team_a(),
        score_team_b: m.score_team_b(),
        teams: vec![(Side::A, side_a), (Side::B, side_b)],
        unassigned,
    }
}

fn roster_player(player: &Value) -> RosterPlayer {
    let stat = |keys: &[&str]| coerce::to_number(coerce::first_present(player, keys), 0.0);

    RosterPlayer {
        username: input::player_name(player),
        team: input::player_team(player),
        kills: stat(&["kills"]),
        deaths: stat(&["deaths"]),
        assists: stat(&["assists"]),
        kd: stat(input::PLAYER_KD_KEYS),
        headshot_pct: stat(input::PLAYER_HEADSHOT_KEYS),
        operator: operator::player_operator(player),
    }
}
