pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod types;

pub use entities::{
    Background, CampaignListing, Character, CharacterBase, CharacterListing, ClassLevel, Race,
    RacialTrait, Subrace,
};

pub use error::DomainError;

pub use ids::{CampaignId, CharacterId, UserId};

pub use types::{Ability, AbilityScores, Size, Skill};
