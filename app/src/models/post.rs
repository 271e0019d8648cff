//! Post, story, and comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Denormalized author snapshot
///
/// Records embed a copy of the author fields they render instead of a
/// foreign key; editing a user does not rewrite existing records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: String,
}

/// Feed post entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: AuthorRef,
    pub caption: String,
    pub media_urls: Vec<String>,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub saves: u32,
    /// Optimistic local flags; never reconciled with anything
    pub liked_by_me: bool,
    pub saved_by_me: bool,
    pub created_at: DateTime<Utc>,
}

/// Story entity shown on the feed rail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub author: AuthorRef,
    pub media_url: String,
    pub viewed: bool,
    pub expires_at: DateTime<Utc>,
}

/// Comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: AuthorRef,
    pub text: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}
