//! Read access to raw match records.
//!
//! Match records come from several scrapers and older saved files, so field
//! names differ between sources. Every accessor probes an ordered list of
//! candidate keys and degrades to an empty/zero default.

use serde_json::Value;

use crate::coerce;

pub const MATCH_ID_KEYS: &[&str] = &["matchId", "id"];
pub const SCORE_TEAM_A_KEYS: &[&str] = &["scoreTeamA", "teamAScore"];
pub const SCORE_TEAM_B_KEYS: &[&str] = &["scoreTeamB", "teamBScore"];
pub const ROUND_DATA_KEYS: &[&str] = &["roundData", "round_data"];
pub const KILL_FEED_KEYS: &[&str] = &["killFeed", "killfeed", "kills", "events"];

pub const PLAYER_ID_KEYS: &[&str] = &["id", "playerId", "profileId"];
pub const PLAYER_TEAM_KEYS: &[&str] = &["teamId", "team", "side"];
pub const PLAYER_KD_KEYS: &[&str] = &["kd", "kdRatio"];
pub const PLAYER_HEADSHOT_KEYS: &[&str] = &["headshotPct", "headshotPercentage", "hsPct"];

pub(crate) fn array(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

fn non_empty_array(value: Option<&Value>) -> Option<&[Value]> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => Some(items.as_slice()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    raw: Value,
}

impl Match {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    pub fn parse(buf: &[u8]) -> Result<Self, crate::Error> {
        let raw: Value = serde_json::from_slice(buf)?;
        if !raw.is_object() {
            return Err(crate::Error::NotAnObject);
        }

        Ok(Self { raw })
    }

    pub fn match_id(&self) -> String {
        coerce::first_text(&self.raw, MATCH_ID_KEYS)
    }

    pub fn map(&self) -> String {
        coerce::first_text(&self.raw, &["map", "mapName"])
    }

    pub fn mode(&self) -> String {
        coerce::first_text(&self.raw, &["mode", "gameMode"])
    }

    pub fn date(&self) -> String {
        coerce::first_text(&self.raw, &["date", "timestamp"])
    }

    pub fn score_team_a(&self) -> f64 {
        coerce::to_number(coerce::first_present(&self.raw, SCORE_TEAM_A_KEYS), 0.0)
    }

    pub fn score_team_b(&self) -> f64 {
        coerce::to_number(coerce::first_present(&self.raw, SCORE_TEAM_B_KEYS), 0.0)
    }

    /// Match level roster
    pub fn players(&self) -> &[Value] {
        array(self.raw.get("players"))
    }

    /// The rich telemetry block, only if it declares at least one round.
    pub fn round_data(&self) -> Option<RoundData<'_>> {
        let block = coerce::first_present(&self.raw, ROUND_DATA_KEYS)?;
        let rounds = non_empty_array(block.get("rounds"))?;

        Some(RoundData { block, rounds })
    }

    /// Pre-shaped rounds from older saved matches.
    pub fn legacy_rounds(&self) -> Option<&[Value]> {
        non_empty_array(self.raw.get("rounds"))
    }

    /// Per-player summary segments.
    pub fn segments(&self) -> Option<&[Value]> {
        non_empty_array(self.raw.get("segments")).or_else(|| {
            self.raw
                .get("summary")
                .and_then(|summary| non_empty_array(summary.get("segments")))
        })
    }
}

impl From<Value> for Match {
    fn from(raw: Value) -> Self {
        Self::from_value(raw)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoundData<'m> {
    block: &'m Value,
    rounds: &'m [Value],
}

impl<'m> RoundData<'m> {
    pub fn players(&self) -> &'m [Value] {
        array(self.block.get("players"))
    }

    /// Declared rounds, never empty.
    pub fn rounds(&self) -> &'m [Value] {
        self.rounds
    }

    /// Flat kill feed of the whole match.
    pub fn kill_feed(&self) -> &'m [Value] {
        array(coerce::first_present(self.block, KILL_FEED_KEYS))
    }
}

/// Username of a roster entry.
pub fn player_name(player: &Value) -> String {
    coerce::extract_name(player)
}

pub fn player_id(player: &Value) -> String {
    coerce::first_text(player, PLAYER_ID_KEYS)
}

pub fn player_team(player: &Value) -> String {
    coerce::first_text(player, PLAYER_TEAM_KEYS)
}
