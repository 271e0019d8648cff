//! Messages screen: the conversation inbox

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::Conversation;

const INBOX_SIZE: usize = 8;

/// Inbox controller
#[derive(Debug)]
pub struct MessagesScreen {
    config: AppConfig,
    conversations: Vec<Conversation>,
    loading: bool,
}

impl MessagesScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            conversations: Vec::new(),
            loading: false,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generate the inbox, newest conversation first
    pub async fn load(&mut self, rng: &mut impl Rng) {
        self.loading = true;
        info!("Loading inbox");
        simulate_delay(&self.config, 1).await;

        let mut conversations: Vec<Conversation> =
            (0..INBOX_SIZE).map(|_| mock::conversation(rng)).collect();
        conversations.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        self.conversations = conversations;
        self.loading = false;
    }

    /// Sum of unread badges across the inbox
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }

    /// Open a conversation, zeroing its unread badge
    pub fn open(&mut self, conversation_id: Uuid) -> Option<&Conversation> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)?;
        conversation.unread = 0;
        Some(conversation)
    }

    /// Refresh a conversation's denormalized last-message copy and
    /// float it to the top
    pub fn refresh_last_message(
        &mut self,
        conversation_id: Uuid,
        text: &str,
        at: DateTime<Utc>,
    ) -> bool {
        let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        else {
            return false;
        };
        conversation.last_message = text.to_string();
        conversation.last_message_at = at;
        self.conversations
            .sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn loaded() -> MessagesScreen {
        let mut rng = StdRng::seed_from_u64(61);
        let mut screen = MessagesScreen::new(AppConfig::instant());
        screen.load(&mut rng).await;
        screen
    }

    #[tokio::test]
    async fn test_inbox_is_sorted_newest_first() {
        let screen = loaded().await;
        assert_eq!(screen.conversations().len(), INBOX_SIZE);

        let times: Vec<DateTime<Utc>> = screen
            .conversations()
            .iter()
            .map(|c| c.last_message_at)
            .collect();
        assert!(times.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_open_zeroes_unread() {
        let mut screen = loaded().await;
        let id = screen.conversations()[0].id;

        screen.open(id).unwrap();
        assert_eq!(screen.conversations()[0].unread, 0);
        assert!(screen.open(Uuid::new_v4()).is_none());
    }

    #[tokio::test]
    async fn test_refresh_last_message_floats_to_top() {
        let mut screen = loaded().await;
        let last = screen.conversations().last().unwrap().id;

        assert!(screen.refresh_last_message(last, "see you soon", Utc::now()));
        assert_eq!(screen.conversations()[0].id, last);
        assert_eq!(screen.conversations()[0].last_message, "see you soon");
    }

    #[tokio::test]
    async fn test_total_unread_sums_badges() {
        let mut screen = loaded().await;
        let expected: u32 = screen.conversations().iter().map(|c| c.unread).sum();
        assert_eq!(screen.total_unread(), expected);

        for id in screen
            .conversations()
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>()
        {
            screen.open(id);
        }
        assert_eq!(screen.total_unread(), 0);
    }
}
