//! Bracket logic: roster operations and the layout engines.

mod layout;
mod played;
mod sides;
mod unplayed;

pub use layout::{get_layout_data, LayoutEngine, LayoutRequest};
pub use played::PlayedEngine;
pub use sides::{add_side, remove_side, side_changed, AddSideOptions};
pub use unplayed::UnplayedEngine;
