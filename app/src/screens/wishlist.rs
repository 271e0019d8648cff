//! Wishlist screen: saved hosts

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::User;

const WISHLIST_SIZE: usize = 4;

/// Wishlist controller
#[derive(Debug)]
pub struct WishlistScreen {
    config: AppConfig,
    hosts: Vec<User>,
    loading: bool,
}

impl WishlistScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            hosts: Vec::new(),
            loading: false,
        }
    }

    pub fn hosts(&self) -> &[User] {
        &self.hosts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Generate the saved-host list
    pub async fn load(&mut self, rng: &mut impl Rng) {
        self.loading = true;
        info!("Loading wishlist");
        simulate_delay(&self.config, 1).await;
        self.hosts = mock::hosts(rng, WISHLIST_SIZE);
        self.loading = false;
    }

    /// Remove a host from the list; returns false for an unknown id
    pub fn remove(&mut self, host_id: Uuid) -> bool {
        let before = self.hosts.len();
        self.hosts.retain(|h| h.id != host_id);
        self.hosts.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_remove_until_empty() {
        let mut rng = StdRng::seed_from_u64(81);
        let mut screen = WishlistScreen::new(AppConfig::instant());
        screen.load(&mut rng).await;
        assert!(!screen.is_empty());

        assert!(!screen.remove(Uuid::new_v4()));

        for id in screen.hosts().iter().map(|h| h.id).collect::<Vec<_>>() {
            assert!(screen.remove(id));
        }
        assert!(screen.is_empty());
    }
}
