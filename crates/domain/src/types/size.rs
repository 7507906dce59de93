//! Creature size categories.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size category, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl Size {
    pub const ALL: [Size; 6] = [
        Size::Tiny,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::Huge,
        Size::Gargantuan,
    ];

    /// One category larger. Gargantuan stays Gargantuan.
    pub fn enlarge(self) -> Self {
        match self {
            Size::Tiny => Size::Small,
            Size::Small => Size::Medium,
            Size::Medium => Size::Large,
            Size::Large => Size::Huge,
            Size::Huge | Size::Gargantuan => Size::Gargantuan,
        }
    }

    /// One category smaller. Tiny stays Tiny.
    pub fn reduce(self) -> Self {
        match self {
            Size::Tiny | Size::Small => Size::Tiny,
            Size::Medium => Size::Small,
            Size::Large => Size::Medium,
            Size::Huge => Size::Large,
            Size::Gargantuan => Size::Huge,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Size::Tiny => "Tiny",
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::Huge => "Huge",
            Size::Gargantuan => "Gargantuan",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tiny" => Ok(Size::Tiny),
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            "huge" => Ok(Size::Huge),
            "gargantuan" => Ok(Size::Gargantuan),
            _ => Err(DomainError::parse(format!("Unknown size: {}", s))),
        }
    }
}
