//! Game system rules.
//!
//! Only D&D 5th Edition is modelled; its formulas back every derived value on
//! [`crate::Character`].

pub mod dnd5e;

pub use dnd5e::{
    ability_modifier, armor_class, format_modifier, hit_dice_summary, max_hit_points,
    proficiency_bonus, total_level,
};
