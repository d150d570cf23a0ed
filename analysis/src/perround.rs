//! Reconstruction of ordered rounds from a match record.
//!
//! Two sources exist for the same rounds. The rich `roundData` block carries a
//! full roster and a flat kill feed that has to be grouped and resolved, the
//! legacy `rounds` array is already shaped but often misses operator data. The
//! rich block wins when present and borrows missing operators from the legacy
//! rounds by position.

use std::collections::{HashMap, HashSet};

use common::{KillEvent, Round, RoundPlayer};
use serde_json::Value;

use crate::coerce;
use crate::input::{self, Match, RoundData};
use crate::operator;
use crate::teams::{self, Role, TeamBinding};

pub const ROUND_ID_KEYS: &[&str] = &["id", "roundId", "roundNumber"];
pub const EVENT_ROUND_KEYS: &[&str] = &["roundId", "round", "round_id"];
pub const WINNER_KEYS: &[&str] = &["winner", "winningTeam", "winnerTeamId"];
pub const OUTCOME_KEYS: &[&str] = &["outcome", "winCondition", "endReason"];
pub const TIMESTAMP_KEYS: &[&str] = &["timestamp", "time", "timeMs"];
pub const KILLER_ID_KEYS: &[&str] = &["attackerId", "killerId"];
pub const VICTIM_ID_KEYS: &[&str] = &["victimId"];
pub const KILLER_NAME_KEYS: &[&str] = &["attackerName", "killerName"];
pub const VICTIM_NAME_KEYS: &[&str] = &["victimName"];
pub const LEGACY_EVENT_KEYS: &[&str] = &["killEvents", "kill_events", "events"];

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Borrow operators from a legacy `rounds` array of the same length
    pub merge_legacy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { merge_legacy: true }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerRound {
    pub rounds: Vec<Round>,
}

pub fn parse(config: &Config, buf: &[u8]) -> Result<PerRound, crate::Error> {
    let m = Match::parse(buf)?;
    Ok(reconstruct_with(config, &m))
}

pub fn reconstruct(m: &Match) -> PerRound {
    reconstruct_with(&Config::default(), m)
}

#[tracing::instrument(name = "PerRound", skip_all, fields(match_id = %m.match_id()))]
pub fn reconstruct_with(config: &Config, m: &Match) -> PerRound {
    let legacy = m.legacy_rounds().map(|rounds| {
        rounds
            .iter()
            .enumerate()
            .map(|(position, round)| legacy_round(position, round))
            .collect::<Vec<_>>()
    });

    let rounds = match m.round_data() {
        Some(data) => {
            tracing::debug!(rounds = data.rounds().len(), "Reconstructing from rich telemetry");

            let rich = rich_rounds(data);
            match legacy {
                Some(legacy) if config.merge_legacy => merge_rounds(rich, &legacy),
                _ => rich,
            }
        }
        None => match legacy {
            Some(legacy) => {
                tracing::debug!(rounds = legacy.len(), "Using legacy rounds");
                legacy
            }
            None => {
                tracing::debug!("Match has no round data");
                Vec::new()
            }
        },
    };

    warn_duplicate_numbers(&rounds);

    PerRound { rounds }
}

fn warn_duplicate_numbers(rounds: &[Round]) {
    let mut seen = HashSet::new();
    for round in rounds {
        if !seen.insert(round.round_number) {
            tracing::warn!(round_number = round.round_number, "Duplicate round number");
        }
    }
}

/// Keeps `own` unless it is empty, in which case the sibling value is used.
pub fn prefer_non_empty(own: String, sibling: &str) -> String {
    if own.is_empty() {
        sibling.to_owned()
    } else {
        own
    }
}

/// Fills the empty operators of `rich` from the legacy event at the same index.
pub fn merge_event(rich: KillEvent, legacy: &KillEvent) -> KillEvent {
    KillEvent {
        killer_operator: prefer_non_empty(rich.killer_operator, &legacy.killer_operator),
        victim_operator: prefer_non_empty(rich.victim_operator, &legacy.victim_operator),
        ..rich
    }
}

/// Positional merge of one rich round with its legacy counterpart.
///
/// Events are paired by index only, mismatched counts are merged as far as both
/// lists reach.
pub fn merge_round(rich: Round, legacy: &Round) -> Round {
    if rich.kill_events.len() != legacy.kill_events.len() {
        tracing::warn!(
            round_number = rich.round_number,
            rich = rich.kill_events.len(),
            legacy = legacy.kill_events.len(),
            "Kill event counts differ, operator merge may be misaligned"
        );
    }

    let kill_events = rich
        .kill_events
        .into_iter()
        .enumerate()
        .map(|(index, event)| match legacy.kill_events.get(index) {
            Some(sibling) => merge_event(event, sibling),
            None => event,
        })
        .collect();

    let players = if rich.players.is_empty() {
        legacy.players.clone()
    } else {
        rich.players
    };

    Round {
        players,
        kill_events,
        ..rich
    }
}

fn merge_rounds(rich: Vec<Round>, legacy: &[Round]) -> Vec<Round> {
    if rich.len() != legacy.len() {
        tracing::warn!(
            rich = rich.len(),
            legacy = legacy.len(),
            "Legacy rounds do not line up with telemetry, skipping merge"
        );
        return rich;
    }

    rich.into_iter()
        .zip(legacy)
        .map(|(round, sibling)| merge_round(round, sibling))
        .collect()
}

/// Id keyed lookups over one roster. Later entries overwrite earlier ones.
#[derive(Debug, Default)]
struct Roster {
    names: HashMap<String, String>,
    teams: HashMap<String, String>,
    operators: HashMap<String, String>,
}

impl Roster {
    fn from_players(players: &[Value]) -> Self {
        let mut roster = Self::default();

        for player in players {
            let id = input::player_id(player);
            if id.is_empty() {
                continue;
            }

            let name = input::player_name(player);
            if !name.is_empty() {
                roster.names.insert(id.clone(), name);
            }

            let team = input::player_team(player);
            if !team.is_empty() {
                roster.teams.insert(id.clone(), team);
            }

            let operator = operator::player_operator(player);
            if !operator.is_empty() {
                roster.operators.insert(id, operator);
            }
        }

        roster
    }

    fn name(&self, id: &str) -> &str {
        self.names.get(id).map(String::as_str).unwrap_or("")
    }

    fn team(&self, id: &str) -> Option<&str> {
        self.teams.get(id).map(String::as_str)
    }

    fn operator(&self, id: &str) -> &str {
        self.operators.get(id).map(String::as_str).unwrap_or("")
    }
}

struct RichContext<'m> {
    roster: Roster,
    binding: TeamBinding,
    feed: HashMap<String, Vec<&'m Value>>,
}

fn round_key(value: Option<&Value>) -> String {
    match coerce::as_integer(value) {
        Some(id) => id.to_string(),
        None => coerce::to_text(value),
    }
}

fn group_kill_feed(feed: &[Value]) -> HashMap<String, Vec<&Value>> {
    let mut grouped: HashMap<String, Vec<&Value>> = HashMap::new();
    for event in feed {
        let key = round_key(coerce::first_present(event, EVENT_ROUND_KEYS));
        if key.is_empty() {
            tracing::trace!(?event, "Kill event without round id");
            continue;
        }
        grouped.entry(key).or_default().push(event);
    }
    grouped
}

fn rich_rounds(data: RoundData<'_>) -> Vec<Round> {
    let players = data.players();
    let context = RichContext {
        roster: Roster::from_players(players),
        binding: TeamBinding::from_players(players, input::PLAYER_TEAM_KEYS),
        feed: group_kill_feed(data.kill_feed()),
    };

    data.rounds()
        .iter()
        .enumerate()
        .map(|(position, round)| rich_round(&context, position, round))
        .collect()
}

fn rich_round(context: &RichContext<'_>, position: usize, round: &Value) -> Round {
    let id = coerce::first_present(round, ROUND_ID_KEYS);
    let integer_id = coerce::as_integer(id);
    let round_number = integer_id.unwrap_or(position as i64 + 1);

    // Rounds without an integer id are numbered by position, the feed may be
    // keyed by that number or by the raw id text.
    let events = context
        .feed
        .get(&round_number.to_string())
        .or_else(|| context.feed.get(&coerce::to_text(id)))
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let round_players = input::array(round.get("players"));
    let local = Roster::from_players(round_players);

    let kill_events = events
        .iter()
        .map(|event| rich_event(context, &local, event))
        .collect::<Vec<_>>();

    tracing::trace!(round_number, events = kill_events.len(), "Reconstructed round");

    let winner = coerce::first_text(round, WINNER_KEYS);
    let winner = match context.binding.resolve_team_color(&winner) {
        Some(side) => side.as_str().to_owned(),
        None => winner,
    };

    Round {
        round_number,
        winner,
        outcome: coerce::first_text(round, OUTCOME_KEYS),
        players: round_players
            .iter()
            .map(|player| rich_round_player(context, player))
            .collect(),
        kill_events,
    }
}

fn rich_event(context: &RichContext<'_>, local: &Roster, event: &Value) -> KillEvent {
    let killer_id = coerce::first_text(event, KILLER_ID_KEYS);
    let victim_id = coerce::first_text(event, VICTIM_ID_KEYS);

    let display_name = |id: &str, name_keys: &[&str]| {
        let name = prefer_non_empty(context.roster.name(id).to_owned(), local.name(id));
        let name = prefer_non_empty(name, &coerce::first_text(event, name_keys));
        prefer_non_empty(name, id)
    };

    let resolve_team = |id: &str, role: Role| {
        let roster_team = context.roster.team(id).or_else(|| local.team(id));
        context
            .binding
            .extract_team_from_event(event, role, roster_team)
    };

    // Round rosters only fill in what the match roster could not resolve.
    let resolve_operator = |id: &str, keys: &[&str]| {
        let own = operator::operator_from_keys(event, keys);
        let own = prefer_non_empty(own, context.roster.operator(id));
        prefer_non_empty(own, local.operator(id))
    };

    KillEvent {
        timestamp: coerce::first_text(event, TIMESTAMP_KEYS),
        killer_name: display_name(&killer_id, KILLER_NAME_KEYS),
        victim_name: display_name(&victim_id, VICTIM_NAME_KEYS),
        killer_team: resolve_team(&killer_id, Role::Killer),
        victim_team: resolve_team(&victim_id, Role::Victim),
        killer_operator: resolve_operator(&killer_id, operator::KILLER_OPERATOR_KEYS),
        victim_operator: resolve_operator(&victim_id, operator::VICTIM_OPERATOR_KEYS),
        killer_id,
        victim_id,
    }
}

fn rich_round_player(context: &RichContext<'_>, player: &Value) -> RoundPlayer {
    let mut entry = round_player(player);

    entry.username = prefer_non_empty(entry.username, context.roster.name(&entry.id));
    entry.operator = prefer_non_empty(entry.operator, context.roster.operator(&entry.id));

    let label = prefer_non_empty(
        entry.team,
        context.roster.team(&entry.id).unwrap_or(""),
    );
    entry.team = match context.binding.resolve_team_color(&label) {
        Some(side) => side.as_str().to_owned(),
        None => label,
    };

    entry
}

fn round_player(player: &Value) -> RoundPlayer {
    let stat = |keys: &[&str]| coerce::to_number(coerce::first_present(player, keys), 0.0);

    RoundPlayer {
        id: input::player_id(player),
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

fn legacy_round(position: usize, round: &Value) -> Round {
    let round_number = coerce::as_integer(coerce::first_present(round, &["roundNumber", "round", "id"]))
        .unwrap_or(position as i64 + 1);

    let events = input::array(coerce::first_present(round, LEGACY_EVENT_KEYS));

    Round {
        round_number,
        winner: coerce::first_text(round, &["winner"]),
        outcome: coerce::first_text(round, &["outcome"]),
        players: input::array(round.get("players"))
            .iter()
            .map(round_player)
            .collect(),
        kill_events: events.iter().map(legacy_event).collect(),
    }
}

fn legacy_event(event: &Value) -> KillEvent {
    KillEvent {
        timestamp: coerce::first_text(event, TIMESTAMP_KEYS),
        killer_id: coerce::first_text(event, &["killerId"]),
        victim_id: coerce::first_text(event, &["victimId"]),
        killer_name: coerce::first_text(event, &["killerName"]),
        victim_name: coerce::first_text(event, &["victimName"]),
        killer_team: teams::normalize_team_label(&coerce::first_text(event, &["killerTeam"])),
        victim_team: teams::normalize_team_label(&coerce::first_text(event, &["victimTeam"])),
        killer_operator: operator::operator_from_keys(event, operator::LEGACY_KILLER_OPERATOR_KEYS),
        victim_operator: operator::operator_from_keys(event, operator::LEGACY_VICTIM_OPERATOR_KEYS),
    }
}
