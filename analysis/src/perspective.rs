//! Score and result of a match from the point of view of one player.

use common::{MatchResult, Perspective};
use serde_json::Value;

use crate::coerce;
use crate::input::{self, Match};

pub const HANDLE_KEYS: &[&str] = &["platformUserHandle", "name", "username"];

fn segment_handle(segment: &Value) -> String {
    let handle = coerce::first_text(segment, HANDLE_KEYS);
    if !handle.is_empty() {
        return handle;
    }

    segment
        .get("metadata")
        .map(|metadata| coerce::first_text(metadata, HANDLE_KEYS))
        .unwrap_or_default()
}

/// A stat is either a bare number or an object with a `value`.
fn stat_value(stats: &Value, key: &str) -> Option<f64> {
    match stats.get(key) {
        Some(object @ Value::Object(_)) => coerce::as_number(object.get("value")),
        other => coerce::as_number(other),
    }
}

fn from_segments(m: &Match, key: &str) -> Option<(f64, f64)> {
    let segment = m
        .segments()?
        .iter()
        .find(|segment| coerce::name_key(&segment_handle(segment)) == key)?;

    let stats = segment.get("stats")?;
    let won = stat_value(stats, "roundsWon")?;
    let lost = stat_value(stats, "roundsLost")?;

    Some((won, lost))
}

fn from_team_scores(m: &Match, key: &str) -> (f64, f64) {
    let score_a = m.score_team_a();
    let score_b = m.score_team_b();

    let on_team_b = m
        .players()
        .iter()
        .filter(|player| !key.is_empty() && coerce::name_key(&input::player_name(player)) == key)
        .find_map(|player| match coerce::to_text(player.get("team")).as_str() {
            "A" => Some(false),
            "B" => Some(true),
            _ => None,
        })
        .unwrap_or(false);

    if on_team_b {
        (score_b, score_a)
    } else {
        (score_a, score_b)
    }
}

#[tracing::instrument(skip(m), fields(match_id = %m.match_id()))]
pub fn infer_team_perspective(m: &Match, username: &str) -> Perspective {
    let key = coerce::name_key(username);

    let from_summary = if key.is_empty() {
        None
    } else {
        from_segments(m, &key)
    };

    let (my_score, opp_score) = match from_summary {
        Some(scores) => scores,
        None => {
            tracing::trace!("No summary segment, using team scores");
            from_team_scores(m, &key)
        }
    };

    Perspective {
        my_score,
        opp_score,
        result: MatchResult::from_scores(my_score, opp_score),
    }
}
