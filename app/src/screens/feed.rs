//! Feed screen: stories rail and post list

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::{Comment, Post, Story, User};

const PAGE_SIZE: usize = 10;
const STORY_COUNT: usize = 8;

/// Feed controller
///
/// Engagement counters are rewritten in place on toggle; nothing is
/// reconciled with any other screen's copy of the same post.
#[derive(Debug)]
pub struct FeedScreen {
    config: AppConfig,
    stories: Vec<Story>,
    posts: Vec<Post>,
    loading: bool,
    page: u32,
}

impl FeedScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            stories: Vec::new(),
            posts: Vec::new(),
            loading: false,
            page: 0,
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Generate the first page, replacing any existing state
    pub async fn load(&mut self, rng: &mut impl Rng) {
        self.loading = true;
        info!("Loading feed");
        simulate_delay(&self.config, 1).await;

        self.stories = (0..STORY_COUNT).map(|_| mock::story(rng)).collect();
        self.posts = mock::posts(rng, PAGE_SIZE);
        self.page = 1;
        self.loading = false;
    }

    /// Append another generated page; the infinite-scroll sentinel
    /// calls this as it becomes visible
    pub async fn load_more(&mut self, rng: &mut impl Rng) {
        if self.loading {
            return;
        }
        self.loading = true;
        simulate_delay(&self.config, 1).await;

        self.posts.extend(mock::posts(rng, PAGE_SIZE));
        self.page += 1;
        self.loading = false;
        info!(page = self.page, "Feed page appended");
    }

    /// Flip the like flag and counter; returns the new flag
    pub fn toggle_like(&mut self, post_id: Uuid) -> Option<bool> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.liked_by_me = !post.liked_by_me;
        if post.liked_by_me {
            post.likes += 1;
        } else {
            post.likes = post.likes.saturating_sub(1);
        }
        Some(post.liked_by_me)
    }

    /// Flip the save flag and counter; returns the new flag
    pub fn toggle_save(&mut self, post_id: Uuid) -> Option<bool> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.saved_by_me = !post.saved_by_me;
        if post.saved_by_me {
            post.saves += 1;
        } else {
            post.saves = post.saves.saturating_sub(1);
        }
        Some(post.saved_by_me)
    }

    /// Optimistically append a comment and bump the counter
    pub fn add_comment(&mut self, post_id: Uuid, author: &User, text: &str) -> Option<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.comments += 1;

        Some(Comment {
            id: Uuid::new_v4(),
            post_id,
            author: author.as_author(),
            text: text.to_string(),
            likes: 0,
            created_at: chrono::Utc::now(),
        })
    }

    /// Generate the comment sheet for a post
    pub async fn open_comments(&self, post_id: Uuid, rng: &mut impl Rng) -> Vec<Comment> {
        simulate_delay(&self.config, 1).await;
        let count = self
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| (p.comments as usize).min(6))
            .unwrap_or(0);
        (0..count).map(|_| mock::comment(rng, post_id)).collect()
    }

    /// Mark a story viewed; returns false for an unknown story
    pub fn mark_story_viewed(&mut self, story_id: Uuid) -> bool {
        match self.stories.iter_mut().find(|s| s.id == story_id) {
            Some(story) => {
                story.viewed = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn loaded() -> (FeedScreen, StdRng) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut screen = FeedScreen::new(AppConfig::instant());
        screen.load(&mut rng).await;
        (screen, rng)
    }

    #[tokio::test]
    async fn test_load_replaces_state() {
        let (mut screen, mut rng) = loaded().await;
        assert_eq!(screen.posts().len(), PAGE_SIZE);
        assert_eq!(screen.stories().len(), STORY_COUNT);
        assert_eq!(screen.page(), 1);

        let first_ids: Vec<_> = screen.posts().iter().map(|p| p.id).collect();
        screen.load(&mut rng).await;
        let second_ids: Vec<_> = screen.posts().iter().map(|p| p.id).collect();
        assert_ne!(first_ids, second_ids);
        assert_eq!(screen.page(), 1);
    }

    #[tokio::test]
    async fn test_load_more_strictly_appends() {
        let (mut screen, mut rng) = loaded().await;
        let first_ids: Vec<_> = screen.posts().iter().map(|p| p.id).collect();

        screen.load_more(&mut rng).await;
        assert_eq!(screen.posts().len(), PAGE_SIZE * 2);
        assert_eq!(screen.page(), 2);

        let kept: Vec<_> = screen.posts()[..PAGE_SIZE].iter().map(|p| p.id).collect();
        assert_eq!(first_ids, kept);
    }

    #[tokio::test]
    async fn test_toggle_like_flips_flag_and_counter_both_ways() {
        let (mut screen, _) = loaded().await;
        let id = screen.posts()[0].id;
        let before = screen.posts()[0].likes;

        assert_eq!(screen.toggle_like(id), Some(true));
        assert_eq!(screen.posts()[0].likes, before + 1);

        assert_eq!(screen.toggle_like(id), Some(false));
        assert_eq!(screen.posts()[0].likes, before);
    }

    #[tokio::test]
    async fn test_toggle_like_unknown_post() {
        let (mut screen, _) = loaded().await;
        assert_eq!(screen.toggle_like(Uuid::new_v4()), None);
    }

    #[tokio::test]
    async fn test_add_comment_bumps_counter() {
        let (mut screen, mut rng) = loaded().await;
        let id = screen.posts()[0].id;
        let before = screen.posts()[0].comments;
        let user = mock::current_user(&mut rng, "me@example.com");

        let comment = screen.add_comment(id, &user, "nice!").unwrap();
        assert_eq!(comment.text, "nice!");
        assert_eq!(screen.posts()[0].comments, before + 1);

        assert!(screen.add_comment(id, &user, "   ").is_none());
    }

    #[tokio::test]
    async fn test_open_comments_matches_post() {
        let (screen, mut rng) = loaded().await;
        let id = screen.posts()[0].id;

        let sheet = screen.open_comments(id, &mut rng).await;
        assert!(sheet.len() <= 6);
        assert!(sheet.iter().all(|c| c.post_id == id));

        let none = screen.open_comments(Uuid::new_v4(), &mut rng).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_mark_story_viewed() {
        let (mut screen, _) = loaded().await;
        let id = screen.stories()[0].id;

        assert!(screen.mark_story_viewed(id));
        assert!(screen.stories()[0].viewed);
        assert!(!screen.mark_story_viewed(Uuid::new_v4()));
    }
}
