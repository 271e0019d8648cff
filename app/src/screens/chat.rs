//! Chat screen for a paid session
//!
//! The session runs against a countdown seeded from the booked
//! duration; a ticking interval drives `tick` once per second and the
//! session ends when it reaches zero. The peer is scripted: every sent
//! message gets a canned reply after a short typing pause.

use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::{AuthorRef, Message, User};

/// Chat controller
#[derive(Debug)]
pub struct ChatScreen {
    config: AppConfig,
    conversation_id: Uuid,
    host: AuthorRef,
    viewer_id: Uuid,
    messages: Vec<Message>,
    remaining_secs: u64,
    active: bool,
    peer_typing: bool,
}

impl ChatScreen {
    /// Open a session with the host for the booked duration
    pub fn new(config: AppConfig, host: &User, viewer_id: Uuid, duration_mins: u32) -> Self {
        Self {
            config,
            conversation_id: Uuid::new_v4(),
            host: host.as_author(),
            viewer_id,
            messages: Vec::new(),
            remaining_secs: u64::from(duration_mins) * 60,
            active: true,
            peer_typing: false,
        }
    }

    pub fn host(&self) -> &AuthorRef {
        &self.host
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn peer_typing(&self) -> bool {
        self.peer_typing
    }

    /// Seed the opening host message
    pub async fn load(&mut self, rng: &mut impl Rng) {
        simulate_delay(&self.config, 1).await;
        let mut greeting = mock::message(rng, self.conversation_id, self.host.id);
        greeting.sent_at = Utc::now();
        greeting.read = true;
        self.messages.push(greeting);
    }

    /// Send a message and wait out the scripted reply
    ///
    /// The viewer's message is appended optimistically before the
    /// typing pause; the canned host reply lands after it.
    pub async fn send(&mut self, text: &str, rng: &mut impl Rng) -> Result<(), String> {
        if !self.active {
            return Err("The session has ended".to_string());
        }
        let text = text.trim();
        if text.is_empty() {
            return Err("Message cannot be empty".to_string());
        }

        self.messages.push(Message {
            id: Uuid::new_v4(),
            conversation_id: self.conversation_id,
            sender_id: self.viewer_id,
            content: text.to_string(),
            sent_at: Utc::now(),
            read: false,
        });

        self.peer_typing = true;
        simulate_delay(&self.config, 1).await;
        self.messages.push(Message {
            id: Uuid::new_v4(),
            conversation_id: self.conversation_id,
            sender_id: self.host.id,
            content: mock::canned_reply(rng),
            sent_at: Utc::now(),
            read: true,
        });
        self.peer_typing = false;

        Ok(())
    }

    /// Advance the countdown; the interval driver calls this once per
    /// second
    pub fn tick(&mut self, secs: u64) {
        if !self.active {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(secs);
        if self.remaining_secs == 0 {
            self.active = false;
            info!(host = %self.host.name, "Chat session ended");
        }
    }

    /// The last message, for the inbox's denormalized copy
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn session(duration_mins: u32) -> (ChatScreen, StdRng) {
        let mut rng = StdRng::seed_from_u64(51);
        let host = mock::host(&mut rng);
        let mut screen = ChatScreen::new(
            AppConfig::instant(),
            &host,
            Uuid::new_v4(),
            duration_mins,
        );
        screen.load(&mut rng).await;
        (screen, rng)
    }

    #[tokio::test]
    async fn test_send_appends_message_and_scripted_reply() {
        let (mut screen, mut rng) = session(30).await;
        let before = screen.messages().len();

        screen.send("hey!", &mut rng).await.unwrap();
        assert_eq!(screen.messages().len(), before + 2);

        let mine = &screen.messages()[before];
        let reply = &screen.messages()[before + 1];
        assert_eq!(mine.content, "hey!");
        assert_eq!(reply.sender_id, screen.host().id);
        assert!(!screen.peer_typing());
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let (mut screen, mut rng) = session(30).await;
        assert!(screen.send("   ", &mut rng).await.is_err());
    }

    #[tokio::test]
    async fn test_countdown_reaches_zero_and_ends_session() {
        let (mut screen, mut rng) = session(1).await;
        assert_eq!(screen.remaining_secs(), 60);

        for _ in 0..59 {
            screen.tick(1);
        }
        assert!(screen.is_active());

        screen.tick(1);
        assert!(!screen.is_active());
        assert_eq!(screen.remaining_secs(), 0);

        // Ticks past zero are inert, and sends are refused
        screen.tick(1);
        assert_eq!(screen.remaining_secs(), 0);
        assert!(screen.send("hello?", &mut rng).await.is_err());
    }
}
