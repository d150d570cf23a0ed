use analysis::teams::{normalize_team_label, Role, TeamBinding};
use common::Side;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn normalize_labels() {
    assert_eq!(normalize_team_label("Blue Team"), Some(Side::A));
    assert_eq!(normalize_team_label(" A "), Some(Side::A));
    assert_eq!(normalize_team_label("team_a"), Some(Side::A));
    assert_eq!(normalize_team_label("TEAMB"), Some(Side::B));
    assert_eq!(normalize_team_label("orange"), Some(Side::B));
    assert_eq!(normalize_team_label("alpha"), None);
    assert_eq!(normalize_team_label(""), None);
}

#[test]
fn declared_labels_bind_first() {
    let binding = TeamBinding::from_labels(["zeta", "Orange", "blue"]);

    assert_eq!(binding.get("blue"), Some(Side::A));
    assert_eq!(binding.get("Orange"), Some(Side::B));
    // Both sides are taken, the rest defaults to A
    assert_eq!(binding.get("zeta"), Some(Side::A));
}

#[test]
fn at_most_one_declared_label_per_side() {
    let binding = TeamBinding::from_labels(["blue", "light-blue", "b"]);

    assert_eq!(binding.get("blue"), Some(Side::A));
    assert_eq!(binding.get("b"), Some(Side::B));
    assert_eq!(binding.get("light-blue"), Some(Side::A));
}

#[test]
fn remainder_is_lexicographic() {
    let binding = TeamBinding::from_labels(["team-2", "team-1"]);

    assert_eq!(binding.get("team-1"), Some(Side::A));
    assert_eq!(binding.get("team-2"), Some(Side::B));

    let binding = TeamBinding::from_labels(["y", "blue", "x"]);

    assert_eq!(binding.get("blue"), Some(Side::A));
    assert_eq!(binding.get("x"), Some(Side::B));
    assert_eq!(binding.get("y"), Some(Side::A));
}

#[test]
fn binding_is_stable_for_repeated_labels() {
    let binding = TeamBinding::from_labels(["1", "0", "1", "0", " 1 "]);

    assert_eq!(binding.len(), 2);
    assert_eq!(binding.get("0"), Some(Side::A));
    assert_eq!(binding.get("1"), Some(Side::B));
}

#[test]
fn lookup_fallback_uses_colors_only() {
    let binding = TeamBinding::from_labels(["x"]);

    assert_eq!(binding.resolve_team_color("x"), Some(Side::A));
    assert_eq!(binding.resolve_team_color("Dark Orange"), Some(Side::B));
    assert_eq!(binding.resolve_team_color("b"), None);
    assert_eq!(binding.resolve_team_color(""), None);
}

#[test]
fn event_team_extraction() {
    let binding = TeamBinding::from_labels(["t1", "t2"]);

    let event = json!({ "killerTeam": "t2", "victimTeamId": "" });
    assert_eq!(
        binding.extract_team_from_event(&event, Role::Killer, Some("t1")),
        Some(Side::B)
    );
    assert_eq!(
        binding.extract_team_from_event(&event, Role::Victim, Some("t1")),
        Some(Side::A)
    );
    assert_eq!(binding.extract_team_from_event(&event, Role::Victim, None), None);
}

#[test]
fn players_binding() {
    let players = vec![
        json!({ "teamId": 7 }),
        json!({ "team": "blue" }),
        json!({ "side": "whatever" }),
    ];
    let binding = TeamBinding::from_players(&players, analysis::input::PLAYER_TEAM_KEYS);

    assert_eq!(binding.get("blue"), Some(Side::A));
    assert_eq!(binding.get("7"), Some(Side::B));
    assert_eq!(binding.get("whatever"), Some(Side::A));
}
