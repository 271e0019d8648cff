//! Help & support screen: FAQ accordion and a support-ticket form

use tracing::info;

use crate::config::{AppConfig, simulate_delay};

/// The hardcoded FAQ list
const FAQS: &[(&str, &str)] = &[
    (
        "How do paid sessions work?",
        "Pick a host, choose a duration, and pay the hourly rate. The chat opens immediately and a timer counts your session down.",
    ),
    (
        "Can I get a refund?",
        "Upcoming sessions can be cancelled from the bookings screen any time before they start.",
    ),
    (
        "How do I change my handle?",
        "Handles are fixed at registration. Contact support if yours needs to change.",
    ),
    (
        "Why do you scan my face at sign-up?",
        "The scan keeps profiles real. It runs once during registration and is never shown to other users.",
    ),
    (
        "How is my distance to a host calculated?",
        "From your city to theirs, as the crow flies. Enable location access to see distances.",
    ),
];

/// Help & support controller
#[derive(Debug)]
pub struct HelpSupportScreen {
    config: AppConfig,
    expanded: Option<usize>,
    ticket_sent: bool,
    error: Option<String>,
}

impl HelpSupportScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            expanded: None,
            ticket_sent: false,
            error: None,
        }
    }

    /// The FAQ entries, in display order
    pub fn faqs(&self) -> &'static [(&'static str, &'static str)] {
        FAQS
    }

    /// Index of the expanded accordion entry, if any
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn ticket_sent(&self) -> bool {
        self.ticket_sent
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Expand an entry, collapsing it when tapped again
    pub fn toggle_faq(&mut self, index: usize) {
        if index >= FAQS.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Validate and submit a support ticket; always succeeds after the
    /// simulated delay
    pub async fn submit_ticket(&mut self, subject: &str, message: &str) -> Result<(), String> {
        if subject.trim().is_empty() {
            let e = "Subject is required".to_string();
            self.error = Some(e.clone());
            return Err(e);
        }
        if message.trim().is_empty() {
            let e = "Message is required".to_string();
            self.error = Some(e.clone());
            return Err(e);
        }
        if message.len() > 1000 {
            let e = "Message must be at most 1000 characters long".to_string();
            self.error = Some(e.clone());
            return Err(e);
        }

        self.error = None;
        info!(subject, "Submitting support ticket");
        simulate_delay(&self.config, 1).await;
        self.ticket_sent = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_toggles_and_collapses() {
        let mut screen = HelpSupportScreen::new(AppConfig::instant());
        assert!(screen.expanded().is_none());

        screen.toggle_faq(2);
        assert_eq!(screen.expanded(), Some(2));

        screen.toggle_faq(0);
        assert_eq!(screen.expanded(), Some(0));

        screen.toggle_faq(0);
        assert!(screen.expanded().is_none());

        // Out-of-range taps are ignored
        screen.toggle_faq(99);
        assert!(screen.expanded().is_none());
    }

    #[tokio::test]
    async fn test_ticket_requires_subject_and_message() {
        let mut screen = HelpSupportScreen::new(AppConfig::instant());

        assert!(screen.submit_ticket("", "help me").await.is_err());
        assert!(screen.submit_ticket("Billing", "  ").await.is_err());
        assert!(!screen.ticket_sent());

        screen
            .submit_ticket("Billing", "I was charged twice")
            .await
            .unwrap();
        assert!(screen.ticket_sent());
        assert!(screen.error().is_none());
    }
}
