//! Layout for a bracket that has started: recorded results where they exist,
//! synthetic structure for everything not yet reached.

use crate::models::{
    LayoutContext, LayoutMatch, LayoutRound, LayoutSide, MatchOptions, RoundMatch, SideId,
    TournamentSide,
};

use super::layout::{LayoutEngine, LayoutRequest};
use super::unplayed::{level_count, pair_level, round_name, Mnemonics, UnplayedEngine};

/// Walks the recorded round chain in tandem with the synthetic bracket shape.
///
/// Holds an [`UnplayedEngine`] and delegates to it for every level the chain
/// has not reached, so a half-played night shows real results for finished
/// rounds and a projected shape for the rest.
#[derive(Clone, Copy, Debug)]
pub struct PlayedEngine {
    unplayed: UnplayedEngine,
}

impl PlayedEngine {
    pub fn new(unplayed: UnplayedEngine) -> Self {
        Self { unplayed }
    }
}

impl LayoutEngine for PlayedEngine {
    fn calculate(&self, request: &LayoutRequest<'_>) -> Vec<LayoutRound> {
        let round = match request.round {
            Some(r) if !r.matches.is_empty() => r,
            _ => return self.unplayed.calculate(request),
        };

        let n = request.sides.len();
        let total_levels = level_count(n.max(2));
        let context = request.context;
        let mut mnemonics = Mnemonics::default();
        let mut entrants: Vec<LayoutSide> = request
            .sides
            .iter()
            .map(|s| LayoutSide::from_side(s.clone(), context))
            .collect();
        let mut rounds = Vec::new();
        let mut depth = 0;
        let mut level = Some(round);

        while let Some(real) = level {
            if real.matches.is_empty() {
                break;
            }
            let options = real.match_options.unwrap_or(context.match_options);
            let sides_tonight = (depth == 0).then_some(n);

            let mut matches = Vec::new();
            let mut next_entrants = Vec::new();
            let mut placed: Vec<TournamentSide> = Vec::new();

            for m in &real.matches {
                let layout = real_match_layout(m, options, sides_tonight, &mut mnemonics, context);
                if let Some(s) = m.side_a.clone() {
                    placed.push(s);
                }
                if let Some(s) = m.side_b.clone() {
                    placed.push(s);
                }
                next_entrants.push(advancing_entrant(m, &layout, context));
                matches.push(layout);
            }

            // Entrants eligible at this level but absent from any recorded
            // match are completed synthetically within the same level, so the
            // bracket keeps its shape while the night is still in progress.
            let placed_ids: Vec<SideId> = placed.iter().map(|s| s.id).collect();
            let unplaced: Vec<LayoutSide> = entrants
                .iter()
                .filter(|e| e.side_id().map_or(true, |id| !placed_ids.contains(&id)))
                .cloned()
                .collect();
            if !unplaced.is_empty() {
                let (extra, extra_next) = pair_level(&unplaced, n, depth, &mut mnemonics, options);
                matches.extend(extra);
                next_entrants.extend(extra_next);
            }

            let possible_sides: Vec<TournamentSide> =
                entrants.iter().filter_map(|e| e.side.clone()).collect();
            rounds.push(LayoutRound {
                name: round_name(n, total_levels, depth),
                matches,
                possible_sides,
                already_selected: placed,
                round: Some(real.this_level()),
            });

            entrants = next_entrants;
            depth += 1;
            level = real.next_round.as_deref();
        }

        rounds.extend(self.unplayed.continue_layout(
            entrants,
            n,
            total_levels,
            depth,
            &mut mnemonics,
            context,
        ));
        rounds
    }
}

/// Render one recorded match. Contested matches consume a slot label so later
/// rounds can reference their winner; byes do not.
fn real_match_layout(
    m: &RoundMatch,
    options: MatchOptions,
    sides_tonight: Option<usize>,
    mnemonics: &mut Mnemonics,
    context: &LayoutContext<'_>,
) -> LayoutMatch {
    let bye = m.side_a.is_some() != m.side_b.is_some();
    let mnemonic = (!bye).then(|| mnemonics.next_label());
    LayoutMatch {
        side_a: slot(m.side_a.clone(), context),
        side_b: slot(m.side_b.clone(), context),
        mnemonic,
        score_a: m.score_a.map(|s| s.to_string()),
        score_b: m.score_b.map(|s| s.to_string()),
        bye,
        winner: match_winner(m),
        match_options: options,
        scoring_session_id: m.scoring_session_id,
        sides_tonight,
    }
}

fn slot(side: Option<TournamentSide>, context: &LayoutContext<'_>) -> LayoutSide {
    match side {
        Some(s) => LayoutSide::from_side(s, context),
        None => LayoutSide::empty(),
    }
}

/// Higher score wins; a tie or a missing score leaves the match undecided.
/// A recorded bye advances the side that showed up.
fn match_winner(m: &RoundMatch) -> Option<SideId> {
    match (&m.side_a, &m.side_b) {
        (Some(a), None) => return Some(a.id),
        (None, Some(b)) => return Some(b.id),
        _ => {}
    }
    match (m.score_a, m.score_b) {
        (Some(a), Some(b)) if a > b => m.side_a.as_ref().map(|s| s.id),
        (Some(a), Some(b)) if b > a => m.side_b.as_ref().map(|s| s.id),
        _ => None,
    }
}

/// What this match feeds into the next level: the winning side when decided,
/// otherwise a slot waiting on the match's label.
fn advancing_entrant(
    m: &RoundMatch,
    layout: &LayoutMatch,
    context: &LayoutContext<'_>,
) -> LayoutSide {
    if let Some(winner) = layout.winner {
        let sides = [&m.side_a, &m.side_b];
        if let Some(side) = sides.into_iter().flatten().find(|s| s.id == winner) {
            return LayoutSide::from_side(side.clone(), context);
        }
    }
    match &layout.mnemonic {
        Some(label) => LayoutSide::unresolved(label.clone()),
        None => LayoutSide::empty(),
    }
}
