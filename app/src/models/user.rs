//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender options shown in profile forms and discovery filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

/// User entity
///
/// Covers both regular users and hosts; hosts set `is_host` and carry a
/// nonzero hourly rate. Whichever screen edits a user mutates it ad hoc
/// in its own copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// `#`-prefixed unique handle chosen at registration
    pub handle: String,
    pub display_name: String,
    pub avatar_url: String,
    pub bio: String,
    pub age: u8,
    /// City name from the geocode table
    pub location: String,
    pub gender: Gender,
    /// Average rating, 0.0 when unrated
    pub rating: f32,
    /// USD per hour, 0 for non-hosts
    pub hourly_rate: u32,
    pub is_host: bool,
    pub is_online: bool,
    /// Whether the viewing user follows this user
    pub followed_by_me: bool,
    pub interests: Vec<String>,
    pub photos: Vec<String>,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Snapshot used wherever a record embeds its author/peer
    pub fn as_author(&self) -> super::AuthorRef {
        super::AuthorRef {
            id: self.id,
            name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
