//! Render-ready bracket structures produced by the layout engines.
//!
//! These are derived values, separate from the persisted `Round`/`RoundMatch`
//! data: the engines never write back into the round chain.

use crate::models::round::{MatchOptions, Round};
use crate::models::side::{SideId, TournamentSide};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Label for one bracket level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum RoundName {
    Preliminary,
    #[serde(rename = "Quarter-Final")]
    QuarterFinal,
    #[serde(rename = "Semi-Final")]
    SemiFinal,
    Final,
}

impl fmt::Display for RoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundName::Preliminary => "Preliminary",
            RoundName::QuarterFinal => "Quarter-Final",
            RoundName::SemiFinal => "Semi-Final",
            RoundName::Final => "Final",
        })
    }
}

/// Caller-supplied context for a layout computation: the match defaults to
/// apply where no round overrides them, and a hook mapping a side to a
/// renderable link. The link is opaque to the engines and attached to each
/// layout side untouched.
pub struct LayoutContext<'a> {
    pub match_options: MatchOptions,
    pub side_link: &'a dyn Fn(&TournamentSide) -> Option<String>,
}

fn no_link(_: &TournamentSide) -> Option<String> {
    None
}

impl<'a> LayoutContext<'a> {
    pub fn new(match_options: MatchOptions) -> Self {
        Self {
            match_options,
            side_link: &no_link,
        }
    }

    pub fn with_side_link(
        match_options: MatchOptions,
        side_link: &'a dyn Fn(&TournamentSide) -> Option<String>,
    ) -> Self {
        Self {
            match_options,
            side_link,
        }
    }
}

impl Default for LayoutContext<'static> {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

/// One slot of a layout match: a known side, or a mnemonic naming the match
/// whose winner fills the slot ("winner of A").
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutSide {
    pub side: Option<TournamentSide>,
    pub mnemonic: Option<String>,
    /// Opaque render link from the caller's context.
    pub link: Option<String>,
}

impl LayoutSide {
    /// The empty slot opposite a bye.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A slot waiting on the winner of the match labelled `mnemonic`.
    pub fn unresolved(mnemonic: String) -> Self {
        Self {
            side: None,
            mnemonic: Some(mnemonic),
            link: None,
        }
    }

    /// A slot holding a known side, with the context's link attached.
    pub fn from_side(side: TournamentSide, context: &LayoutContext<'_>) -> Self {
        let link = (context.side_link)(&side);
        Self {
            side: Some(side),
            mnemonic: None,
            link,
        }
    }

    pub fn side_id(&self) -> Option<SideId> {
        self.side.as_ref().map(|s| s.id)
    }
}

/// A match as rendered: real or synthetic, decided or not.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutMatch {
    pub side_a: LayoutSide,
    pub side_b: LayoutSide,
    /// Slot label later rounds use to refer to this match's winner.
    /// Byes carry none; their winner is already known.
    pub mnemonic: Option<String>,
    /// Scores as display strings; missing scores render blank.
    pub score_a: Option<String>,
    pub score_b: Option<String>,
    pub bye: bool,
    pub winner: Option<SideId>,
    pub match_options: MatchOptions,
    pub scoring_session_id: Option<Uuid>,
    /// First round only: how many sides are contesting tonight.
    pub sides_tonight: Option<usize>,
}

/// One rendered bracket level, ordered earliest round first in the engine
/// output; the last entry is always the Final when there are 2+ sides.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutRound {
    pub name: RoundName,
    pub matches: Vec<LayoutMatch>,
    /// Sides still eligible to be placed at this level.
    pub possible_sides: Vec<TournamentSide>,
    /// Sides already placed into recorded matches at this level.
    pub already_selected: Vec<TournamentSide>,
    /// The recorded round this level was reconciled against, if any.
    pub round: Option<Round>,
}
