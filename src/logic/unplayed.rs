//! Synthetic bracket layout for a round nobody has thrown a dart in yet.

use crate::models::{
    LayoutContext, LayoutMatch, LayoutRound, LayoutSide, MatchOptions, RoundName, TournamentSide,
};

use super::layout::{LayoutEngine, LayoutRequest};

/// Number of bracket levels `n` sides need: ceil(log2(n)). Zero for fewer
/// than two sides.
pub(crate) fn level_count(n: usize) -> usize {
    let mut levels = 0;
    let mut capacity = 1;
    while capacity < n {
        capacity *= 2;
        levels += 1;
    }
    levels
}

/// Label for the level `depth` levels into a bracket of `total_sides`.
///
/// Names count back from the Final. Small nights never earn the bigger
/// labels: "Semi-Final" needs at least 4 sides, "Quarter-Final" at least 8;
/// anything earlier (or smaller) is "Preliminary".
pub(crate) fn round_name(total_sides: usize, total_levels: usize, depth: usize) -> RoundName {
    match total_levels.saturating_sub(depth + 1) {
        0 => RoundName::Final,
        1 if total_sides >= 4 => RoundName::SemiFinal,
        2 if total_sides >= 8 => RoundName::QuarterFinal,
        _ => RoundName::Preliminary,
    }
}

/// Sequential slot labels: A, B, …, Z, AA, AB, …
///
/// One allocator is threaded through an entire layout computation so labels
/// stay unique and stable across real and synthetic levels.
#[derive(Clone, Debug, Default)]
pub(crate) struct Mnemonics {
    next: usize,
}

impl Mnemonics {
    pub(crate) fn next_label(&mut self) -> String {
        let mut index = self.next;
        self.next += 1;
        let mut label = String::new();
        loop {
            label.insert(0, (b'A' + (index % 26) as u8) as char);
            if index < 26 {
                break;
            }
            index = index / 26 - 1;
        }
        label
    }
}

/// Pair entrants positionally: slot 1 vs slot 2, slot 3 vs slot 4, and so on.
/// An odd entrant out gets a bye, emitted as a match with the bye flag set,
/// an empty opposing slot, and the winner marked.
pub(crate) fn pair_level(
    entrants: &[LayoutSide],
    total_sides: usize,
    depth: usize,
    mnemonics: &mut Mnemonics,
    options: MatchOptions,
) -> (Vec<LayoutMatch>, Vec<LayoutSide>) {
    let sides_tonight = (depth == 0).then_some(total_sides);
    let mut matches = Vec::new();
    let mut next = Vec::new();
    for pair in entrants.chunks(2) {
        if let [a, b] = pair {
            let label = mnemonics.next_label();
            matches.push(LayoutMatch {
                side_a: a.clone(),
                side_b: b.clone(),
                mnemonic: Some(label.clone()),
                score_a: None,
                score_b: None,
                bye: false,
                winner: None,
                match_options: options,
                scoring_session_id: None,
                sides_tonight,
            });
            next.push(LayoutSide::unresolved(label));
        } else {
            let lone = pair[0].clone();
            matches.push(LayoutMatch {
                side_a: lone.clone(),
                side_b: LayoutSide::empty(),
                mnemonic: None,
                score_a: None,
                score_b: None,
                bye: true,
                winner: lone.side_id(),
                match_options: options,
                scoring_session_id: None,
                sides_tonight,
            });
            next.push(lone);
        }
    }
    (matches, next)
}

/// Lays out the whole bracket synthetically from the side list alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnplayedEngine;

impl LayoutEngine for UnplayedEngine {
    fn calculate(&self, request: &LayoutRequest<'_>) -> Vec<LayoutRound> {
        let n = request.sides.len();
        if n < 2 {
            // A bracket needs at least two sides to produce a round.
            return Vec::new();
        }
        let entrants: Vec<LayoutSide> = request
            .sides
            .iter()
            .map(|s| LayoutSide::from_side(s.clone(), request.context))
            .collect();
        let mut mnemonics = Mnemonics::default();
        self.continue_layout(
            entrants,
            n,
            level_count(n),
            0,
            &mut mnemonics,
            request.context,
        )
    }
}

impl UnplayedEngine {
    /// Build every level from `depth` onward, halving the entrant list until
    /// one side remains. The played engine calls this for the part of the
    /// bracket the round chain has not reached, passing its own allocator so
    /// slot labels stay sequential across the boundary.
    pub(crate) fn continue_layout(
        &self,
        mut entrants: Vec<LayoutSide>,
        total_sides: usize,
        total_levels: usize,
        mut depth: usize,
        mnemonics: &mut Mnemonics,
        context: &LayoutContext<'_>,
    ) -> Vec<LayoutRound> {
        let mut rounds = Vec::new();
        while entrants.len() >= 2 {
            let (matches, next) = pair_level(
                &entrants,
                total_sides,
                depth,
                mnemonics,
                context.match_options,
            );
            let possible_sides: Vec<TournamentSide> =
                entrants.iter().filter_map(|e| e.side.clone()).collect();
            rounds.push(LayoutRound {
                name: round_name(total_sides, total_levels, depth),
                matches,
                possible_sides,
                already_selected: Vec::new(),
                round: None,
            });
            entrants = next;
            depth += 1;
        }
        rounds
    }
}
