use common::{HeadToHead, Round};

use crate::input::Match;
use crate::perround;

pub fn compute(rounds: &[Round]) -> HeadToHead {
    let mut head_to_head = HeadToHead::default();

    for event in rounds.iter().flat_map(|round| round.kill_events.iter()) {
        if event.killer_name.is_empty() || event.victim_name.is_empty() {
            continue;
        }
        if event.killer_name == event.victim_name {
            continue;
        }
        if event.killer_team.is_some() && event.killer_team == event.victim_team {
            continue;
        }

        let killer_entry = head_to_head
            .kills
            .entry(event.killer_name.clone())
            .or_default();
        let victim_killed: &mut usize = killer_entry.entry(event.victim_name.clone()).or_default();
        *victim_killed += 1;
    }

    head_to_head
}

pub fn for_match(config: &perround::Config, m: &Match) -> HeadToHead {
    let result = perround::reconstruct_with(config, m);
    compute(&result.rounds)
}
