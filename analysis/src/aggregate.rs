//! Win/loss and KD aggregates over many matches.

use std::collections::HashMap;

use common::{AggregateStats, BucketStats, MatchResult};
use serde_json::Value;

use crate::coerce;
use crate::input::{self, Match};
use crate::perspective;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCategory {
    Ranked,
    Unranked,
    Other,
}

/// `unranked` is checked first since it contains `ranked`.
pub fn classify_mode(mode: &str) -> ModeCategory {
    let mode = mode.to_lowercase();
    if mode.contains("unranked") {
        ModeCategory::Unranked
    } else if mode.contains("ranked") {
        ModeCategory::Ranked
    } else {
        ModeCategory::Other
    }
}

/// Roster row of the named player, duplicates resolve to the last entry.
fn find_player<'m>(m: &'m Match, key: &str) -> Option<&'m Value> {
    let roster: HashMap<String, &Value> = m
        .players()
        .iter()
        .map(|player| (coerce::name_key(&input::player_name(player)), player))
        .collect();

    roster.get(key).copied()
}

fn record(bucket: &mut BucketStats, result: MatchResult, player: Option<&Value>) {
    bucket.matches += 1;
    match result {
        MatchResult::Win => bucket.wins += 1,
        MatchResult::Loss => bucket.losses += 1,
        MatchResult::Unknown => {}
    };

    if let Some(player) = player {
        let stat = |keys: &[&str]| coerce::to_number(coerce::first_present(player, keys), 0.0);

        bucket.kills += stat(&["kills"]);
        bucket.deaths += stat(&["deaths"]);
        bucket.assists += stat(&["assists"]);
        bucket.kd += stat(input::PLAYER_KD_KEYS);
        bucket.tracked_rows += 1;
    }
}

fn finalize(bucket: &mut BucketStats) {
    bucket.win_rate = if bucket.matches > 0 {
        bucket.wins as f64 / bucket.matches as f64 * 100.0
    } else {
        0.0
    };

    let rows = bucket.tracked_rows.max(1) as f64;
    bucket.avg_kills = bucket.kills / rows;
    bucket.avg_deaths = bucket.deaths / rows;
    bucket.avg_assists = bucket.assists / rows;
    bucket.avg_kd = bucket.kd / rows;
}

#[tracing::instrument(skip(matches))]
pub fn compute<'m, I>(matches: I, username: &str) -> AggregateStats
where
    I: IntoIterator<Item = &'m Match>,
{
    let key = coerce::name_key(username);
    let mut stats = AggregateStats::default();

    for m in matches {
        let result = perspective::infer_team_perspective(m, username).result;
        let player = if key.is_empty() {
            None
        } else {
            find_player(m, &key)
        };

        record(&mut stats.overall, result, player);
        match classify_mode(&m.mode()) {
            ModeCategory::Ranked => record(&mut stats.ranked, result, player),
            ModeCategory::Unranked => record(&mut stats.unranked, result, player),
            ModeCategory::Other => {}
        };
    }

    finalize(&mut stats.overall);
    finalize(&mut stats.ranked);
    finalize(&mut stats.unranked);

    tracing::debug!(
        matches = stats.overall.matches,
        wins = stats.overall.wins,
        "Computed aggregates"
    );

    stats
}
