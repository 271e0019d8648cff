//! Host profile screen

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::{AuthorRef, Post, User};

const POST_COUNT: usize = 9;
const REVIEW_COUNT: usize = 5;

/// Profile tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    About,
    Posts,
    Reviews,
}

/// A review left on a host profile; only this screen renders these
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub author: AuthorRef,
    pub rating: f32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Profile controller for the selected host
#[derive(Debug)]
pub struct ProfileScreen {
    config: AppConfig,
    host: User,
    tab: ProfileTab,
    photo_index: usize,
    posts: Vec<Post>,
    reviews: Vec<Review>,
    in_wishlist: bool,
    loading: bool,
}

impl ProfileScreen {
    pub fn new(config: AppConfig, host: User) -> Self {
        Self {
            config,
            host,
            tab: ProfileTab::About,
            photo_index: 0,
            posts: Vec::new(),
            reviews: Vec::new(),
            in_wishlist: false,
            loading: false,
        }
    }

    pub fn host(&self) -> &User {
        &self.host
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn in_wishlist(&self) -> bool {
        self.in_wishlist
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generate the host's posts and reviews
    pub async fn load(&mut self, rng: &mut impl Rng) {
        self.loading = true;
        info!(host = %self.host.display_name, "Loading profile");
        simulate_delay(&self.config, 1).await;

        let author = self.host.as_author();
        self.posts = mock::posts(rng, POST_COUNT)
            .into_iter()
            .map(|mut p| {
                p.author = author.clone();
                p
            })
            .collect();

        self.reviews = (0..REVIEW_COUNT)
            .map(|_| Review {
                id: Uuid::new_v4(),
                author: mock::host(rng).as_author(),
                rating: (rng.gen_range(3.0_f32..=5.0) * 10.0).round() / 10.0,
                text: mock::canned_reply(rng),
                created_at: Utc::now() - Duration::days(rng.gen_range(1..120)),
            })
            .collect();
        self.loading = false;
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// Step to the next photo, wrapping at the end
    pub fn next_photo(&mut self) {
        if self.host.photos.is_empty() {
            return;
        }
        self.photo_index = (self.photo_index + 1) % self.host.photos.len();
    }

    /// Step to the previous photo, wrapping at the start
    pub fn prev_photo(&mut self) {
        if self.host.photos.is_empty() {
            return;
        }
        self.photo_index = self
            .photo_index
            .checked_sub(1)
            .unwrap_or(self.host.photos.len() - 1);
    }

    /// Flip the follow flag on this screen's copy of the host
    pub fn toggle_follow(&mut self) -> bool {
        self.host.followed_by_me = !self.host.followed_by_me;
        if self.host.followed_by_me {
            self.host.followers += 1;
        } else {
            self.host.followers = self.host.followers.saturating_sub(1);
        }
        self.host.followed_by_me
    }

    /// Flip the wishlist flag; returns the new state
    pub fn toggle_wishlist(&mut self) -> bool {
        self.in_wishlist = !self.in_wishlist;
        self.in_wishlist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn loaded() -> ProfileScreen {
        let mut rng = StdRng::seed_from_u64(41);
        let host = mock::host(&mut rng);
        let mut screen = ProfileScreen::new(AppConfig::instant(), host);
        screen.load(&mut rng).await;
        screen
    }

    #[tokio::test]
    async fn test_loaded_posts_belong_to_host() {
        let screen = loaded().await;
        assert_eq!(screen.posts().len(), POST_COUNT);
        for post in screen.posts() {
            assert_eq!(post.author.id, screen.host().id);
        }
        assert_eq!(screen.reviews().len(), REVIEW_COUNT);
    }

    #[tokio::test]
    async fn test_photo_stepper_wraps() {
        let mut screen = loaded().await;
        let count = screen.host().photos.len();
        assert!(count >= 3);

        screen.prev_photo();
        assert_eq!(screen.photo_index(), count - 1);
        screen.next_photo();
        assert_eq!(screen.photo_index(), 0);

        for _ in 0..count {
            screen.next_photo();
        }
        assert_eq!(screen.photo_index(), 0);
    }

    #[tokio::test]
    async fn test_tab_selection() {
        let mut screen = loaded().await;
        assert_eq!(screen.tab(), ProfileTab::About);
        screen.select_tab(ProfileTab::Reviews);
        assert_eq!(screen.tab(), ProfileTab::Reviews);
    }

    #[tokio::test]
    async fn test_follow_and_wishlist_toggles() {
        let mut screen = loaded().await;
        let before = screen.host().followers;

        assert!(screen.toggle_follow());
        assert_eq!(screen.host().followers, before + 1);
        assert!(!screen.toggle_follow());

        assert!(screen.toggle_wishlist());
        assert!(!screen.toggle_wishlist());
    }
}
