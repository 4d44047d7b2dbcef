//! Roster operations: add, remove, and edit sides.
//!
//! Every operation takes a tournament snapshot and returns a new one. Input
//! validation (non-empty names and the like) is the caller's job.

use crate::models::{IdSource, Tournament, TournamentSide};

/// Options for [`add_side`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AddSideOptions {
    /// Split the submitted side into one single-player side per player.
    pub add_as_individuals: bool,
}

/// Add a side to the roster and re-sort it by name.
///
/// With `add_as_individuals` set, each player of `new_side` becomes its own
/// side, named after the player; otherwise `new_side` is added as one side.
/// Either way every new side gets a fresh id from `ids` and a trimmed name.
pub fn add_side(
    tournament: &Tournament,
    new_side: &TournamentSide,
    options: AddSideOptions,
    ids: &mut dyn IdSource,
) -> Tournament {
    let mut next = tournament.clone();
    if options.add_as_individuals {
        for player in &new_side.players {
            let side = TournamentSide::new(ids.next_id(), player.name.trim())
                .with_players(vec![player.clone()]);
            next.sides.push(side);
        }
    } else {
        let mut side = new_side.clone();
        side.id = ids.next_id();
        side.name = side.name.trim().to_string();
        next.sides.push(side);
    }
    next.sides.sort_by(|a, b| a.name.cmp(&b.name));
    next
}

/// Remove the side with a matching id from the roster.
///
/// Matches that already reference the side keep their stored copy; the layout
/// engines tolerate the stale reference.
pub fn remove_side(tournament: &Tournament, side: &TournamentSide) -> Tournament {
    let mut next = tournament.clone();
    next.sides.retain(|s| s.id != side.id);
    next
}

/// Replace the side at `side_index` with `new_side` (name trimmed) and push
/// the updated value into every recorded match referencing its id, at every
/// level of the round chain.
pub fn side_changed(
    tournament: &Tournament,
    new_side: &TournamentSide,
    side_index: usize,
) -> Tournament {
    let mut next = tournament.clone();
    let mut side = new_side.clone();
    side.name = side.name.trim().to_string();
    if let Some(slot) = next.sides.get_mut(side_index) {
        *slot = side.clone();
    }
    let mut level = next.round.as_mut();
    while let Some(round) = level {
        for m in &mut round.matches {
            if let Some(a) = m.side_a.as_mut() {
                if a.id == side.id {
                    *a = side.clone();
                }
            }
            if let Some(b) = m.side_b.as_mut() {
                if b.id == side.id {
                    *b = side.clone();
                }
            }
        }
        level = round.next_round.as_deref_mut();
    }
    next
}
