//! Darts bracket web app: library with models and the bracket layout engines.

pub mod logic;
pub mod models;

pub use logic::{
    add_side, get_layout_data, remove_side, side_changed, AddSideOptions, LayoutEngine,
    LayoutRequest, PlayedEngine, UnplayedEngine,
};
pub use models::{
    IdSource, LayoutContext, LayoutMatch, LayoutRound, LayoutSide, MatchOptions, PlayerId, Round,
    RoundMatch, RoundName, SideId, Tournament, TournamentId, TournamentPlayer, TournamentSide,
    UuidSource,
};
