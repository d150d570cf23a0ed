//! Mapping of arbitrary team labels onto the two sides of a match.
//!
//! Sources label teams as colors, letters, numeric ids or opaque strings. A
//! [`TeamBinding`] is built once per match and never shared between matches,
//! every label seen in that match resolves to the same side for its whole
//! lifetime.

use std::collections::HashMap;

use common::Side;
use serde_json::Value;

use crate::coerce;

static TEAM_ALIASES: phf::Map<&'static str, Side> = phf::phf_map! {
    "a" => Side::A,
    "team_a" => Side::A,
    "teama" => Side::A,
    "b" => Side::B,
    "team_b" => Side::B,
    "teamb" => Side::B,
};

pub const KILLER_TEAM_KEYS: &[&str] = &["attackerTeamId", "attackerTeam", "killerTeamId", "killerTeam"];
pub const VICTIM_TEAM_KEYS: &[&str] = &["victimTeamId", "victimTeam"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Killer,
    Victim,
}

impl Role {
    fn team_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Killer => KILLER_TEAM_KEYS,
            Self::Victim => VICTIM_TEAM_KEYS,
        }
    }
}

/// Side of a label that names its team explicitly, without any match context.
///
/// Colors are matched as substrings (`"Blue Team"`), letters only exactly.
pub fn normalize_team_label(label: &str) -> Option<Side> {
    let normalized = label.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if normalized.contains("blue") || TEAM_ALIASES.get(normalized.as_str()) == Some(&Side::A) {
        return Some(Side::A);
    }
    if normalized.contains("orange") || TEAM_ALIASES.get(normalized.as_str()) == Some(&Side::B) {
        return Some(Side::B);
    }

    None
}

fn color_heuristic(label: &str) -> Option<Side> {
    let normalized = label.trim().to_lowercase();
    if normalized.contains("blue") {
        Some(Side::A)
    } else if normalized.contains("orange") {
        Some(Side::B)
    } else {
        None
    }
}

#[derive(Debug, Default)]
struct BindingFold {
    bindings: HashMap<String, Side>,
    a_taken: bool,
    b_taken: bool,
    remainder: Vec<String>,
}

impl BindingFold {
    fn declared(mut self, label: String) -> Self {
        match normalize_team_label(&label) {
            Some(Side::A) if !self.a_taken => {
                self.a_taken = true;
                self.bindings.insert(label, Side::A);
            }
            Some(Side::B) if !self.b_taken => {
                self.b_taken = true;
                self.bindings.insert(label, Side::B);
            }
            _ => self.remainder.push(label),
        };
        self
    }

    fn inferred(mut self, label: String) -> Self {
        // Labels beyond the second side fall back to A.
        let side = if !self.a_taken {
            self.a_taken = true;
            Side::A
        } else if !self.b_taken {
            self.b_taken = true;
            Side::B
        } else {
            Side::A
        };
        self.bindings.insert(label, side);
        self
    }

    fn finish(self) -> TeamBinding {
        let BindingFold {
            bindings,
            a_taken,
            b_taken,
            mut remainder,
        } = self;
        remainder.sort();
        remainder.dedup();

        let fold = BindingFold {
            bindings,
            a_taken,
            b_taken,
            remainder: Vec::new(),
        };
        let fold = remainder
            .into_iter()
            .fold(fold, |fold, label| fold.inferred(label));

        TeamBinding {
            bindings: fold.bindings,
        }
    }
}

/// The per-match assignment of raw team labels to sides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamBinding {
    bindings: HashMap<String, Side>,
}

impl TeamBinding {
    /// Binds every distinct label, declared colors and letters first and the
    /// rest in lexicographic order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let ordered = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_owned())
            .filter(|label| !label.is_empty())
            .filter(|label| seen.insert(label.clone()));

        let binding = ordered
            .fold(BindingFold::default(), |fold, label| fold.declared(label))
            .finish();

        tracing::debug!(bindings = ?binding.bindings, "Bound team labels");

        binding
    }

    /// Binding over the `team` labels of a list of player entries.
    pub fn from_players(players: &[Value], team_keys: &[&str]) -> Self {
        Self::from_labels(
            players
                .iter()
                .map(|player| coerce::first_text(player, team_keys)),
        )
    }

    pub fn get(&self, label: &str) -> Option<Side> {
        self.bindings.get(label.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Side of a label, falling back to the color names for labels that were
    /// never seen in the roster.
    pub fn resolve_team_color(&self, label: &str) -> Option<Side> {
        self.get(label).or_else(|| color_heuristic(label))
    }

    /// Side of the killer or victim of a kill-feed event.
    ///
    /// Team fields on the event win over the roster team of the participant.
    pub fn extract_team_from_event(
        &self,
        event: &Value,
        role: Role,
        roster_team: Option<&str>,
    ) -> Option<Side> {
        let explicit = coerce::first_text(event, role.team_keys());
        if !explicit.is_empty() {
            if let Some(side) = self.resolve_team_color(&explicit) {
                return Some(side);
            }
        }

        roster_team
            .filter(|label| !label.trim().is_empty())
            .and_then(|label| self.resolve_team_color(label))
    }
}
