//! Integration tests for the roster operations: add, remove, edit sides.

use chrono::{TimeZone, Utc};
use darts_bracket_web::{
    add_side, remove_side, side_changed, AddSideOptions, IdSource, Round, RoundMatch, Tournament,
    TournamentPlayer, TournamentSide,
};
use uuid::Uuid;

/// Deterministic id source: 1, 2, 3, …
struct SeqIds(u128);

impl IdSource for SeqIds {
    fn next_id(&mut self) -> Uuid {
        self.0 += 1;
        Uuid::from_u128(self.0)
    }
}

fn tournament(sides: Vec<TournamentSide>) -> Tournament {
    let date = Utc.with_ymd_and_hms(2024, 9, 5, 19, 0, 0).unwrap();
    Tournament::with_sides(sides, date)
}

fn side(n: u128, name: &str) -> TournamentSide {
    TournamentSide::new(Uuid::from_u128(n), name)
}

fn player(n: u128, name: &str) -> TournamentPlayer {
    TournamentPlayer::new(Uuid::from_u128(n), name)
}

#[test]
fn add_as_individuals_creates_one_side_per_player() {
    let t = tournament(Vec::new());
    let submitted = TournamentSide::new(Uuid::nil(), "Thursday crowd")
        .with_players(vec![player(101, "Ann"), player(102, "Bob")]);
    let mut ids = SeqIds(0);
    let options = AddSideOptions {
        add_as_individuals: true,
    };

    let next = add_side(&t, &submitted, options, &mut ids);

    assert_eq!(next.sides.len(), 2);
    assert_eq!(next.sides[0].name, "Ann");
    assert_eq!(next.sides[1].name, "Bob");
    for s in &next.sides {
        assert_ne!(s.id, Uuid::nil());
        assert_eq!(s.players.len(), 1);
    }
    assert_ne!(next.sides[0].id, next.sides[1].id);
    // Input snapshot untouched.
    assert!(t.sides.is_empty());
}

#[test]
fn add_as_group_trims_name_and_keeps_players_in_order() {
    let t = tournament(Vec::new());
    let submitted = TournamentSide::new(Uuid::nil(), "SIDE  ")
        .with_players(vec![player(101, "Ann"), player(102, "Bob")]);
    let mut ids = SeqIds(0);

    let next = add_side(&t, &submitted, AddSideOptions::default(), &mut ids);

    assert_eq!(next.sides.len(), 1);
    let added = &next.sides[0];
    assert_eq!(added.name, "SIDE");
    assert_eq!(added.id, Uuid::from_u128(1));
    assert_eq!(added.players[0].name, "Ann");
    assert_eq!(added.players[1].name, "Bob");
}

#[test]
fn roster_stays_sorted_by_name_case_sensitively() {
    let t = tournament(vec![side(1, "Banana"), side(2, "apple")]);
    let mut ids = SeqIds(10);

    let next = add_side(&t, &side(0, "Cherry"), AddSideOptions::default(), &mut ids);

    let names: Vec<&str> = next.sides.iter().map(|s| s.name.as_str()).collect();
    // Uppercase sorts before lowercase under plain str ordering.
    assert_eq!(names, vec!["Banana", "Cherry", "apple"]);
}

#[test]
fn remove_side_removes_exactly_the_matching_id() {
    let t = tournament(vec![side(1, "Arrows"), side(2, "Bullseyes"), side(3, "Culls")]);

    let next = remove_side(&t, &side(2, "Bullseyes"));

    let names: Vec<&str> = next.sides.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Arrows", "Culls"]);
    assert_eq!(t.sides.len(), 3);
}

#[test]
fn remove_side_leaves_recorded_matches_untouched() {
    let a = side(1, "Arrows");
    let b = side(2, "Bullseyes");
    let mut t = tournament(vec![a.clone(), b.clone()]);
    t.round = Some(Round {
        matches: vec![RoundMatch::between(a.clone(), b.clone())],
        match_options: None,
        next_round: None,
    });

    let next = remove_side(&t, &b);

    assert_eq!(next.sides.len(), 1);
    let round = next.round.expect("round kept");
    // Stale reference stays; rendering tolerates it.
    assert_eq!(round.matches[0].side_b.as_ref().map(|s| s.id), Some(b.id));
}

#[test]
fn side_changed_replaces_at_index_and_propagates_through_the_chain() {
    let a = side(1, "Arrows");
    let b = side(2, "Bullseyes");
    let c = side(3, "Culls");
    let mut t = tournament(vec![a.clone(), b.clone(), c.clone()]);
    t.round = Some(Round {
        matches: vec![
            RoundMatch::between(a.clone(), b.clone()),
            RoundMatch::between(c.clone(), a.clone()),
        ],
        match_options: None,
        next_round: Some(Box::new(Round {
            matches: vec![RoundMatch::between(a.clone(), c.clone())],
            match_options: None,
            next_round: None,
        })),
    });

    let renamed = TournamentSide::new(a.id, "  Arrows United ")
        .with_players(vec![player(201, "New thrower")]);
    let next = side_changed(&t, &renamed, 0);

    assert_eq!(next.sides[0].name, "Arrows United");
    assert_eq!(next.sides[0].players.len(), 1);

    let round = next.round.expect("round kept");
    assert_eq!(
        round.matches[0].side_a.as_ref().map(|s| s.name.as_str()),
        Some("Arrows United")
    );
    assert_eq!(
        round.matches[1].side_b.as_ref().map(|s| s.name.as_str()),
        Some("Arrows United")
    );
    // Untouched sides keep their stored values.
    assert_eq!(
        round.matches[0].side_b.as_ref().map(|s| s.name.as_str()),
        Some("Bullseyes")
    );
    let nested = round.next_round.expect("nested round kept");
    assert_eq!(
        nested.matches[0].side_a.as_ref().map(|s| s.name.as_str()),
        Some("Arrows United")
    );
    assert_eq!(
        nested.matches[0].side_a.as_ref().map(|s| s.players.len()),
        Some(1)
    );
}

#[test]
fn side_changed_with_out_of_range_index_still_propagates_by_id() {
    let a = side(1, "Arrows");
    let b = side(2, "Bullseyes");
    let mut t = tournament(vec![a.clone(), b.clone()]);
    t.round = Some(Round {
        matches: vec![RoundMatch::between(a.clone(), b.clone())],
        match_options: None,
        next_round: None,
    });

    let renamed = TournamentSide::new(a.id, "Arrows United");
    let next = side_changed(&t, &renamed, 99);

    // Roster slot untouched, but matches referencing the id are updated.
    assert_eq!(next.sides[0].name, "Arrows");
    assert_eq!(
        next.round.unwrap().matches[0]
            .side_a
            .as_ref()
            .map(|s| s.name.as_str()),
        Some("Arrows United")
    );
}
