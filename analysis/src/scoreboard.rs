//! Per round scoreboards.

use std::collections::HashMap;

use common::{PlayerRoundStat, Round, RoundPlayer, Side};

use crate::teams;

/// Scoreboard rows of a round, sorted by team and then by kills.
///
/// Rounds without player entries get a scoreboard derived from their kill feed.
pub fn build_round_score_rows(round: &Round) -> Vec<PlayerRoundStat> {
    let mut rows: Vec<PlayerRoundStat> = round.players.iter().map(player_row).collect();

    if rows.is_empty() {
        tracing::trace!(round_number = round.round_number, "Deriving scoreboard from kill feed");
        rows = rows_from_kill_feed(round);
    }

    sort_rows(&mut rows);
    rows
}

fn player_row(player: &RoundPlayer) -> PlayerRoundStat {
    PlayerRoundStat {
        team: teams::normalize_team_label(&player.team),
        username: player.username.clone(),
        kills: player.kills,
        deaths: player.deaths,
        assists: player.assists,
        kd: player.kd,
        headshot_pct: player.headshot_pct,
        operator: player.operator.clone(),
    }
}

fn sort_rows(rows: &mut [PlayerRoundStat]) {
    rows.sort_by(|a, b| {
        a.team
            .cmp(&b.team)
            .then_with(|| b.kills.total_cmp(&a.kills))
    });
}

#[derive(Debug)]
struct Tally {
    username: String,
    team: Option<Side>,
    operator: String,
    kills: usize,
    deaths: usize,
}

#[derive(Debug, Default)]
struct Tallies {
    order: Vec<Tally>,
    index: HashMap<String, usize>,
}

impl Tallies {
    /// The tally of `name`, team and operator are taken from its first sighting.
    fn entry(&mut self, name: &str, team: Option<Side>, operator: &str) -> &mut Tally {
        let position = match self.index.get(name).copied() {
            Some(position) => position,
            None => {
                self.order.push(Tally {
                    username: name.to_owned(),
                    team,
                    operator: operator.to_owned(),
                    kills: 0,
                    deaths: 0,
                });
                self.index.insert(name.to_owned(), self.order.len() - 1);
                self.order.len() - 1
            }
        };

        &mut self.order[position]
    }
}

fn rows_from_kill_feed(round: &Round) -> Vec<PlayerRoundStat> {
    let mut tallies = Tallies::default();

    for event in round.kill_events.iter() {
        if !event.killer_name.is_empty() {
            tallies
                .entry(&event.killer_name, event.killer_team, &event.killer_operator)
                .kills += 1;
        }
        if !event.victim_name.is_empty() {
            tallies
                .entry(&event.victim_name, event.victim_team, &event.victim_operator)
                .deaths += 1;
        }
    }

    tallies
        .order
        .into_iter()
        .map(|tally| {
            let kills = tally.kills as f64;
            let deaths = tally.deaths as f64;

            PlayerRoundStat {
                team: tally.team,
                username: tally.username,
                kills,
                deaths,
                assists: 0.0,
                kd: if tally.deaths > 0 { kills / deaths } else { kills },
                // Not derivable from the kill feed
                headshot_pct: 0.0,
                operator: tally.operator,
            }
        })
        .collect()
}
