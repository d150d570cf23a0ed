/// One of the two teams in a match. Rendered as blue (A) and orange (B).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Side {
    #[serde(rename = "blue")]
    A,
    #[serde(rename = "orange")]
    B,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "blue",
            Self::B => "orange",
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes an unresolved side as the empty string instead of `null`.
pub mod side_or_empty {
    use super::Side;

    pub fn serialize<S>(side: &Option<Side>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(side.as_ref().map(Side::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Side>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: String = serde::Deserialize::deserialize(deserializer)?;
        match raw.as_str() {
            "blue" => Ok(Some(Side::A)),
            "orange" => Ok(Some(Side::B)),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillEvent {
    pub timestamp: String,
    pub killer_id: String,
    pub victim_id: String,
    pub killer_name: String,
    pub victim_name: String,
    #[serde(with = "side_or_empty")]
    pub killer_team: Option<Side>,
    #[serde(with = "side_or_empty")]
    pub victim_team: Option<Side>,
    pub killer_operator: String,
    pub victim_operator: String,
}

/// A player entry of a round as it was found in the source data.
///
/// `team` holds the side name when the reconstruction could bind it, otherwise
/// the raw label.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPlayer {
    pub id: String,
    pub username: String,
    pub team: String,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kd: f64,
    pub headshot_pct: f64,
    pub operator: String,
}

/// A scoreboard row of a single round
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundStat {
    #[serde(with = "side_or_empty")]
    pub team: Option<Side>,
    pub username: String,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kd: f64,
    pub headshot_pct: f64,
    pub operator: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: i64,
    pub winner: String,
    pub outcome: String,
    pub players: Vec<RoundPlayer>,
    /// Chronological order, index 0 is the first kill of the round
    pub kill_events: Vec<KillEvent>,
}

impl Round {
    /// The opening duel of the round, killer is the first kill and victim the first death.
    pub fn first_kill(&self) -> Option<&KillEvent> {
        self.kill_events.first()
    }
}
