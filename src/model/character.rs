use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A character record as returned by `GET /character/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    /// `Alive`, `Dead` or `unknown`
    pub status: String,
    pub species: String,
    /// Subspecies or variant, empty for most characters
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    /// URLs of every episode the character appears in
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

/// Name and URL pointer to a location resource, not resolved further
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// One page of `GET /character?page={n}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Pagination metadata for a character listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters across all pages
    pub count: u32,
    /// Total number of pages
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Normalised form of [`Character::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStatus {
    Alive,
    Dead,
    Unknown,
}

impl LifeStatus {
    /// Parse the API's status string, case-insensitively
    pub fn from_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }
}

impl Character {
    pub fn life_status(&self) -> LifeStatus {
        LifeStatus::from_status(&self.status)
    }

    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}
