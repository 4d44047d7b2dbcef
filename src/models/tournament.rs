//! Tournament snapshot: one night's roster and recorded rounds.

use crate::models::round::{MatchOptions, Round};
use crate::models::side::{SideId, TournamentSide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament snapshot. The registry operations in `logic::sides` take a
/// snapshot and return a new one; the caller decides what to persist.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// The night this bracket is thrown.
    pub date: DateTime<Utc>,
    /// Roster, kept sorted by name.
    pub sides: Vec<TournamentSide>,
    /// Recorded rounds, once the bracket has started.
    pub round: Option<Round>,
    /// Defaults for matches in rounds without a per-round override.
    #[serde(default)]
    pub match_options: MatchOptions,
}

impl Tournament {
    /// Create an empty tournament for the given night.
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            sides: Vec::new(),
            round: None,
            match_options: MatchOptions::default(),
        }
    }

    /// Create a tournament with an initial roster (e.g. for tests).
    pub fn with_sides(sides: Vec<TournamentSide>, date: DateTime<Utc>) -> Self {
        Self {
            sides,
            ..Self::new(date)
        }
    }

    /// Position of a side in the roster by id.
    pub fn side_index(&self, id: SideId) -> Option<usize> {
        self.sides.iter().position(|s| s.id == id)
    }
}
