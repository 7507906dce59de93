//! Summary rows for list views.

use crate::ids::{CampaignId, CharacterId};
use serde::{Deserialize, Serialize};

/// Character summary for list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterListing {
    pub id: CharacterId,
    pub name: String,
}

impl CharacterListing {
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Campaign summary for list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignListing {
    pub id: CampaignId,
    pub name: String,
}

impl CampaignListing {
    pub fn new(id: impl Into<CampaignId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
