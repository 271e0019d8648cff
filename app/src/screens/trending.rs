//! Trending screen: ranked tags and the posts under the selected one

use rand::Rng;
use tracing::info;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::Post;

const POST_POOL: usize = 30;

/// A tag with its mock popularity
#[derive(Debug, Clone)]
pub struct TrendingTag {
    pub name: String,
    pub post_count: u32,
}

/// Trending controller
#[derive(Debug)]
pub struct TrendingScreen {
    config: AppConfig,
    tags: Vec<TrendingTag>,
    posts: Vec<Post>,
    selected_tag: Option<String>,
    loading: bool,
}

impl TrendingScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            tags: Vec::new(),
            posts: Vec::new(),
            selected_tag: None,
            loading: false,
        }
    }

    pub fn tags(&self) -> &[TrendingTag] {
        &self.tags
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generate the tag ranking and the post pool
    pub async fn load(&mut self, rng: &mut impl Rng) {
        self.loading = true;
        info!("Loading trending");
        simulate_delay(&self.config, 1).await;

        let mut tags: Vec<TrendingTag> = mock::trending_tags()
            .into_iter()
            .map(|name| TrendingTag {
                name: name.to_string(),
                post_count: rng.gen_range(50..5_000),
            })
            .collect();
        tags.sort_by(|a, b| b.post_count.cmp(&a.post_count));

        self.tags = tags;
        self.posts = mock::posts(rng, POST_POOL);
        self.selected_tag = None;
        self.loading = false;
    }

    /// Select a tag; selecting it again clears the selection
    pub fn select_tag(&mut self, name: &str) {
        if self.selected_tag.as_deref() == Some(name) {
            self.selected_tag = None;
        } else {
            self.selected_tag = Some(name.to_string());
        }
    }

    /// Posts under the selected tag, or the whole pool when none is
    pub fn visible_posts(&self) -> Vec<&Post> {
        match &self.selected_tag {
            Some(tag) => self
                .posts
                .iter()
                .filter(|p| p.tags.iter().any(|t| t == tag))
                .collect(),
            None => self.posts.iter().collect(),
        }
    }
}
