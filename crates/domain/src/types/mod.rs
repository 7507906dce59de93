//! # TTRPGZ Domain Types
//!
//! Shared vocabulary types for the character model. These are pure data
//! types: no I/O, no async, and all of them derive Serialize/Deserialize
//! since they appear in stored character records.

mod ability;
pub use ability::{Ability, AbilityScores};

mod skill;
pub use skill::Skill;

mod size;
pub use size::Size;
