//! Presentation layer - view-models rendered by the terminal shell

pub mod character_sheet;
pub mod listings;

pub use character_sheet::CharacterSheetView;
pub use listings::{ListingRow, ListingView};
