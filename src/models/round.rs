//! Recorded rounds: the chain of bracket levels and their matches.

use crate::models::side::TournamentSide;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Options applied to every match in a round unless overridden per round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Best-of leg count.
    pub number_of_legs: u32,
    /// Score each leg starts from.
    pub starting_score: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            number_of_legs: 5,
            starting_score: 501,
        }
    }
}

/// A recorded match between two sides.
///
/// Sides are stored by value so the match keeps rendering even if the roster
/// entry is later edited or removed; roster edits are pushed back into the
/// chain via `side_changed`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundMatch {
    pub side_a: Option<TournamentSide>,
    pub side_b: Option<TournamentSide>,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    /// Link to a leg-by-leg scoring session, when one was used.
    pub scoring_session_id: Option<Uuid>,
}

impl RoundMatch {
    pub fn between(side_a: TournamentSide, side_b: TournamentSide) -> Self {
        Self {
            side_a: Some(side_a),
            side_b: Some(side_b),
            score_a: None,
            score_b: None,
            scoring_session_id: None,
        }
    }

    pub fn with_scores(mut self, score_a: u32, score_b: u32) -> Self {
        self.score_a = Some(score_a);
        self.score_b = Some(score_b);
        self
    }
}

/// One level of the bracket.
///
/// Rounds form a chain rather than a binary tree: a round holds all matches
/// at its level, and `next_round` holds the level after it. A round with no
/// matches has not started.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub matches: Vec<RoundMatch>,
    pub match_options: Option<MatchOptions>,
    pub next_round: Option<Box<Round>>,
}

impl Round {
    /// Copy of this level only, without the rest of the chain.
    pub fn this_level(&self) -> Round {
        Round {
            matches: self.matches.clone(),
            match_options: self.match_options,
            next_round: None,
        }
    }
}
