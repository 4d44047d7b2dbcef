//! Entry point for bracket layout: pick the right engine and run it.

use crate::models::{LayoutContext, LayoutRound, Round, TournamentSide};

use super::played::PlayedEngine;
use super::unplayed::UnplayedEngine;

/// Everything an engine needs for one layout computation.
pub struct LayoutRequest<'a> {
    pub sides: Vec<TournamentSide>,
    pub round: Option<&'a Round>,
    pub context: &'a LayoutContext<'a>,
}

/// A strategy for turning a set of sides into a rendered bracket.
pub trait LayoutEngine {
    fn calculate(&self, request: &LayoutRequest<'_>) -> Vec<LayoutRound>;
}

/// Compute the render-ready bracket for a tournament night.
///
/// No-show sides are dropped first. A round with any recorded match is
/// reconciled against the real results; otherwise the whole bracket is
/// synthetic. This never fails: questionable input degrades to a best-effort
/// layout, since the output only feeds a display.
pub fn get_layout_data(
    round: Option<&Round>,
    sides: &[TournamentSide],
    context: &LayoutContext<'_>,
) -> Vec<LayoutRound> {
    let present: Vec<TournamentSide> = sides.iter().filter(|s| !s.no_show).cloned().collect();
    let started = round.map_or(false, |r| !r.matches.is_empty());
    let request = LayoutRequest {
        sides: present,
        round,
        context,
    };
    if started {
        PlayedEngine::new(UnplayedEngine).calculate(&request)
    } else {
        UnplayedEngine.calculate(&request)
    }
}
