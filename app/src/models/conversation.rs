//! Conversation and message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorRef;

/// Conversation entry in the inbox
///
/// Holds a denormalized copy of the last message so the inbox renders
/// without touching the message list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub peer: AuthorRef,
    pub peer_online: bool,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread: u32,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}
