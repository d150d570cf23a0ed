use analysis::{perround, scoreboard, Match};
use common::{KillEvent, PlayerRoundStat, Round, RoundPlayer, Side};
use pretty_assertions::assert_eq;

fn event(killer: &str, killer_team: Option<Side>, victim: &str, victim_team: Option<Side>) -> KillEvent {
    KillEvent {
        killer_name: killer.to_owned(),
        victim_name: victim.to_owned(),
        killer_team,
        victim_team,
        ..Default::default()
    }
}

#[test]
fn player_rows_sorted_by_team_then_kills() {
    let round = Round {
        round_number: 1,
        players: vec![
            RoundPlayer {
                username: "low-b".to_owned(),
                team: "orange".to_owned(),
                kills: 1.0,
                ..Default::default()
            },
            RoundPlayer {
                username: "unknown".to_owned(),
                team: "spectator".to_owned(),
                ..Default::default()
            },
            RoundPlayer {
                username: "low-a".to_owned(),
                team: "A".to_owned(),
                kills: 0.0,
                ..Default::default()
            },
            RoundPlayer {
                username: "high-a".to_owned(),
                team: "Blue".to_owned(),
                kills: 3.0,
                headshot_pct: 33.3,
                operator: "Ash".to_owned(),
                ..Default::default()
            },
        ],
        // Ignored while player rows exist
        kill_events: vec![event("ghost", None, "other", None)],
        ..Default::default()
    };

    let rows = scoreboard::build_round_score_rows(&round);

    assert_eq!(
        rows.iter()
            .map(|r| (r.team, r.username.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (None, "unknown"),
            (Some(Side::A), "high-a"),
            (Some(Side::A), "low-a"),
            (Some(Side::B), "low-b"),
        ]
    );
    assert_eq!(rows[1].headshot_pct, 33.3);
    assert_eq!(rows[1].operator, "Ash");
}

#[test]
fn fallback_from_kill_feed_scenario() {
    let round = Round {
        round_number: 2,
        kill_events: vec![
            event("A", Some(Side::A), "B", Some(Side::B)),
            event("B", Some(Side::B), "A", Some(Side::A)),
        ],
        ..Default::default()
    };

    let rows = scoreboard::build_round_score_rows(&round);

    assert_eq!(
        rows,
        vec![
            PlayerRoundStat {
                team: Some(Side::A),
                username: "A".to_owned(),
                kills: 1.0,
                deaths: 1.0,
                kd: 1.0,
                ..Default::default()
            },
            PlayerRoundStat {
                team: Some(Side::B),
                username: "B".to_owned(),
                kills: 1.0,
                deaths: 1.0,
                kd: 1.0,
                ..Default::default()
            },
        ]
    );
}

#[test]
fn fallback_kd_without_deaths_is_kill_count() {
    let round = Round {
        kill_events: vec![
            event("ace", Some(Side::B), "x", None),
            event("ace", Some(Side::B), "y", None),
            event("ace", Some(Side::B), "z", None),
            event("x", None, "w", None),
        ],
        ..Default::default()
    };

    let rows = scoreboard::build_round_score_rows(&round);
    let ace = rows.iter().find(|r| r.username == "ace").unwrap();
    let x = rows.iter().find(|r| r.username == "x").unwrap();

    assert_eq!(ace.kills, 3.0);
    assert_eq!(ace.kd, 3.0);
    assert_eq!(ace.headshot_pct, 0.0);
    assert_eq!(x.kd, 1.0);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.last().map(|r| r.username.as_str()), Some("ace"));
}

#[test]
fn fallback_keeps_first_seen_team_and_operator() {
    let round = Round {
        kill_events: vec![
            KillEvent {
                killer_name: "p".to_owned(),
                killer_team: Some(Side::B),
                killer_operator: "First".to_owned(),
                victim_name: "q".to_owned(),
                ..Default::default()
            },
            KillEvent {
                killer_name: "q".to_owned(),
                victim_name: "p".to_owned(),
                victim_team: Some(Side::A),
                victim_operator: "Second".to_owned(),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    let rows = scoreboard::build_round_score_rows(&round);
    let p = rows.iter().find(|r| r.username == "p").unwrap();

    assert_eq!(p.team, Some(Side::B));
    assert_eq!(p.operator, "First");
}

#[test]
fn empty_round_has_no_rows() {
    assert!(scoreboard::build_round_score_rows(&Round::default()).is_empty());
}

#[test]
fn legacy_fixture_round_two_uses_fallback() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../testfiles/legacy.json");
    let input_bytes = std::fs::read(path).unwrap();
    let m = Match::parse(&input_bytes).unwrap();

    let result = perround::reconstruct(&m);
    let rows = scoreboard::build_round_score_rows(&result.rounds[1]);

    assert_eq!(
        rows.iter()
            .map(|r| (r.username.as_str(), r.kills, r.deaths, r.kd, r.operator.as_str()))
            .collect::<Vec<_>>(),
        vec![("Echo", 1.0, 1.0, 1.0, "Sledge"), ("Foxtrot", 1.0, 1.0, 1.0, "Bandit")]
    );
}
