//! Domain entities

mod character;
mod character_base;
mod listing;

pub use character::Character;
pub use character_base::{Background, CharacterBase, ClassLevel, Race, RacialTrait, Subrace};
pub use listing::{CampaignListing, CharacterListing};
