pub mod match_analysis;

pub use match_analysis::{KillEvent, PlayerRoundStat, Round, RoundPlayer, Side};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOverview {
    pub match_id: String,
    pub map: String,
    pub mode: String,
    pub date: String,
    pub score_team_a: f64,
    pub score_team_b: f64,
    pub teams: Vec<(Side, Vec<RosterPlayer>)>,
    /// Players whose team label could not be bound to either side
    pub unassigned: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub username: String,
    pub team: String,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kd: f64,
    pub headshot_pct: f64,
    pub operator: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
    Unknown,
}

impl MatchResult {
    pub fn from_scores(mine: f64, theirs: f64) -> Self {
        if mine > theirs {
            Self::Win
        } else if mine < theirs {
            Self::Loss
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Unknown => "Unknown",
        }
    }
}

impl core::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and result of a match as seen by a single player
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    pub my_score: f64,
    pub opp_score: f64,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketStats {
    pub matches: usize,
    pub wins: usize,
    pub losses: usize,
    pub tracked_rows: usize,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kd: f64,
    pub win_rate: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_kd: f64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AggregateStats {
    pub overall: BucketStats,
    pub ranked: BucketStats,
    pub unranked: BucketStats,
}

/// Killer name -> victim name -> number of kills
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeadToHead {
    pub kills: std::collections::BTreeMap<String, std::collections::BTreeMap<String, usize>>,
}

impl HeadToHead {
    pub fn get(&self, killer: &str, victim: &str) -> usize {
        self.kills
            .get(killer)
            .and_then(|victims| victims.get(victim))
            .copied()
            .unwrap_or(0)
    }
}
