//! Search screen: query over the generated host pool

use rand::Rng;
use tracing::info;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::User;
use common::geo;

const POOL_SIZE: usize = 24;

/// One search hit, with the distance column populated for city search
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub user: User,
    pub distance_km: Option<f64>,
}

/// Search controller
#[derive(Debug)]
pub struct SearchScreen {
    config: AppConfig,
    pool: Vec<User>,
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
}

impl SearchScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            pool: Vec::new(),
            query: String::new(),
            results: Vec::new(),
            loading: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generate the searchable pool
    pub async fn load(&mut self, rng: &mut impl Rng) {
        self.loading = true;
        simulate_delay(&self.config, 1).await;
        self.pool = mock::hosts(rng, POOL_SIZE);
        self.results.clear();
        self.query.clear();
        self.loading = false;
    }

    /// Match hosts by name, handle, or interest (case-insensitive)
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            self.results.clear();
            return;
        }

        self.results = self
            .pool
            .iter()
            .filter(|u| {
                u.display_name.to_lowercase().contains(&needle)
                    || u.handle.to_lowercase().contains(&needle)
                    || u.interests.iter().any(|i| i.contains(&needle))
            })
            .map(|u| SearchResult {
                user: u.clone(),
                distance_km: None,
            })
            .collect();
        info!(query, hits = self.results.len(), "Search ran");
    }

    /// Geocode a city and rank the pool by distance from it
    ///
    /// An unknown city silently yields no results.
    pub fn search_city(&mut self, city: &str) {
        self.query = city.to_string();

        let Some(origin) = geo::geocode(city) else {
            self.results.clear();
            return;
        };

        let mut hits: Vec<SearchResult> = self
            .pool
            .iter()
            .map(|u| SearchResult {
                user: u.clone(),
                distance_km: geo::geocode(&u.location).map(|c| geo::distance_km(origin, c)),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance_km
                .unwrap_or(f64::MAX)
                .partial_cmp(&b.distance_km.unwrap_or(f64::MAX))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.results = hits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn loaded() -> SearchScreen {
        let mut rng = StdRng::seed_from_u64(21);
        let mut screen = SearchScreen::new(AppConfig::instant());
        screen.load(&mut rng).await;
        screen
    }

    #[tokio::test]
    async fn test_search_matches_name_case_insensitively() {
        let mut screen = loaded().await;
        let name = screen.pool[0].display_name.clone();

        screen.search(&name.to_uppercase());
        assert!(
            screen
                .results()
                .iter()
                .any(|r| r.user.display_name == name)
        );
    }

    #[tokio::test]
    async fn test_empty_query_clears_results() {
        let mut screen = loaded().await;
        screen.search("a");
        screen.search("   ");
        assert!(screen.results().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_city_silently_yields_nothing() {
        let mut screen = loaded().await;
        screen.search_city("Atlantis");
        assert!(screen.results().is_empty());
    }

    #[tokio::test]
    async fn test_city_search_sorts_by_distance() {
        let mut screen = loaded().await;
        screen.search_city("New York");

        assert_eq!(screen.results().len(), POOL_SIZE);
        let distances: Vec<f64> = screen
            .results()
            .iter()
            .filter_map(|r| r.distance_km)
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }
}
