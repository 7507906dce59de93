//! List views for the home page.

use std::fmt;

use ttrpgz_domain::{CampaignListing, CharacterListing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub id: String,
    pub name: String,
    /// Route the row links to, if it has a page of its own
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub title: &'static str,
    pub rows: Vec<ListingRow>,
}

impl ListingView {
    pub fn characters(listings: &[CharacterListing]) -> Self {
        Self {
            title: "Characters",
            rows: listings
                .iter()
                .map(|listing| ListingRow {
                    id: listing.id.to_string(),
                    name: listing.name.clone(),
                    link: Some(format!("/character/{}", listing.id)),
                })
                .collect(),
        }
    }

    pub fn campaigns(listings: &[CampaignListing]) -> Self {
        Self {
            title: "Campaigns",
            rows: listings
                .iter()
                .map(|listing| ListingRow {
                    id: listing.id.to_string(),
                    name: listing.name.clone(),
                    link: None,
                })
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ListingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.rows.is_empty() {
            return writeln!(f, "  (none)");
        }
        let width = self.rows.iter().map(|r| r.id.len()).max().unwrap_or(0);
        for row in &self.rows {
            match &row.link {
                Some(link) => writeln!(f, "  {:>width$}  {}  {}", row.id, row.name, link)?,
                None => writeln!(f, "  {:>width$}  {}", row.id, row.name)?,
            }
        }
        Ok(())
    }
}
