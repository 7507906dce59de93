//! Skills and the ability that governs each one.

use crate::error::DomainError;
use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eighteen character skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "acrobatics")]
    Acrobatics,
    #[serde(rename = "animal handling")]
    AnimalHandling,
    #[serde(rename = "arcana")]
    Arcana,
    #[serde(rename = "athletics")]
    Athletics,
    #[serde(rename = "deception")]
    Deception,
    #[serde(rename = "history")]
    History,
    #[serde(rename = "insight")]
    Insight,
    #[serde(rename = "intimidation")]
    Intimidation,
    #[serde(rename = "investigation")]
    Investigation,
    #[serde(rename = "medicine")]
    Medicine,
    #[serde(rename = "nature")]
    Nature,
    #[serde(rename = "perception")]
    Perception,
    #[serde(rename = "performance")]
    Performance,
    #[serde(rename = "persuasion")]
    Persuasion,
    #[serde(rename = "religion")]
    Religion,
    #[serde(rename = "sleight of hand")]
    SleightOfHand,
    #[serde(rename = "stealth")]
    Stealth,
    #[serde(rename = "survival")]
    Survival,
}

impl Skill {
    /// All skills in alphabetical (sheet) order.
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// The ability whose modifier this skill uses.
    pub fn ability(&self) -> Ability {
        match self {
            Skill::Athletics => Ability::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Ability::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Ability::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// Lower-case label, as used in stored character data.
    pub fn label(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "acrobatics",
            Skill::AnimalHandling => "animal handling",
            Skill::Arcana => "arcana",
            Skill::Athletics => "athletics",
            Skill::Deception => "deception",
            Skill::History => "history",
            Skill::Insight => "insight",
            Skill::Intimidation => "intimidation",
            Skill::Investigation => "investigation",
            Skill::Medicine => "medicine",
            Skill::Nature => "nature",
            Skill::Perception => "perception",
            Skill::Performance => "performance",
            Skill::Persuasion => "persuasion",
            Skill::Religion => "religion",
            Skill::SleightOfHand => "sleight of hand",
            Skill::Stealth => "stealth",
            Skill::Survival => "survival",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Skill::ALL
            .iter()
            .copied()
            .find(|skill| skill.label() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}
