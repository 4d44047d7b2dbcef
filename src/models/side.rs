//! Side and player data structures, plus the identifier source.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a side (used in matches and lookups).
pub type SideId = Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// A player belonging to exactly one side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl TournamentPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A team or individual entrant in the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSide {
    pub id: SideId,
    pub name: String,
    pub players: Vec<TournamentPlayer>,
    /// Registered but not present tonight; excluded from the bracket layout.
    #[serde(default)]
    pub no_show: bool,
    /// Withdrew after registering; kept in the roster for display.
    #[serde(default)]
    pub withdrawn: bool,
}

impl TournamentSide {
    /// Create a side with no players and both flags clear.
    pub fn new(id: SideId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            players: Vec::new(),
            no_show: false,
            withdrawn: false,
        }
    }

    pub fn with_players(mut self, players: Vec<TournamentPlayer>) -> Self {
        self.players = players;
        self
    }
}

/// Source of fresh identifiers for new sides.
/// Injected into the registry operations so tests can fix the ids.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Default identifier source: random v4 UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}
