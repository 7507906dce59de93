//! CharacterBase - the immutable definition of a character
//!
//! This is the record the backend hands out. It is never mutated after it is
//! fetched; runtime state (inspiration, hit point tracking) lives on
//! [`super::Character`].

use crate::error::DomainError;
use crate::types::{Ability, AbilityScores, Size, Skill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A level in one class, with that class's hit die size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    pub name: String,
    pub level: u32,
    /// Number of sides on the class hit die (6 for d6, 10 for d10, ...)
    pub hit_dice: u32,
}

impl ClassLevel {
    pub fn new(name: impl Into<String>, level: u32, hit_dice: u32) -> Self {
        Self {
            name: name.into(),
            level,
            hit_dice,
        }
    }
}

/// A named descriptive ability granted by a race or subrace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacialTrait {
    pub name: String,
    pub description: String,
}

impl RacialTrait {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subrace {
    pub name: String,
    #[serde(default)]
    pub ability_score_increase: BTreeMap<Ability, i32>,
    #[serde(default)]
    pub traits: Vec<RacialTrait>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub name: String,
    pub subrace: Subrace,
    pub age: u32,
    #[serde(default)]
    pub ability_score_increase: BTreeMap<Ability, i32>,
    #[serde(default)]
    pub size: Size,
    /// Walking speed in feet
    pub speed: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub traits: Vec<RacialTrait>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub name: String,
}

/// Static snapshot of a character's definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBase {
    pub name: String,
    pub player_name: String,
    pub classes: Vec<ClassLevel>,
    pub race: Race,
    pub background: Background,
    pub alignment: String,
    pub base_ability_scores: AbilityScores,
    #[serde(default)]
    pub skill_proficiencies: Vec<Skill>,
    #[serde(default)]
    pub saving_throw_proficiencies: Vec<Ability>,
    #[serde(default)]
    pub ideals: Vec<String>,
    #[serde(default)]
    pub bonds: Vec<String>,
    #[serde(default)]
    pub flaws: Vec<String>,
}

impl CharacterBase {
    /// Check the invariants derived stats rely on.
    ///
    /// Records from the built-in catalog always pass; this exists for records
    /// decoded from JSON supplied by a backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("character name cannot be empty"));
        }
        if let Some(class) = self.classes.iter().find(|c| c.hit_dice == 0) {
            return Err(DomainError::validation(format!(
                "class '{}' has a zero-sided hit die",
                class.name
            )));
        }
        Ok(())
    }

    /// Parse and validate a record from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let base: CharacterBase =
            serde_json::from_str(json).map_err(|e| DomainError::parse(e.to_string()))?;
        base.validate()?;
        Ok(base)
    }
}
