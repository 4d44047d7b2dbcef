//! Data structures for the bracket: sides, rounds, and layout output.

mod layout;
mod round;
mod side;
mod tournament;

pub use layout::{LayoutContext, LayoutMatch, LayoutRound, LayoutSide, RoundName};
pub use round::{MatchOptions, Round, RoundMatch};
pub use side::{IdSource, PlayerId, SideId, TournamentPlayer, TournamentSide, UuidSource};
pub use tournament::{Tournament, TournamentId};
