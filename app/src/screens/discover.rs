//! Discover screen: host grid with client-side filters

use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::devices::LocationProvider;
use crate::mock;
use crate::models::{Gender, User};
use common::geo::{self, Coordinates};

const PAGE_SIZE: usize = 12;

/// Client-side filters over the loaded host grid
#[derive(Debug, Clone, Default)]
pub struct DiscoverFilters {
    pub gender: Option<Gender>,
    pub min_rating: Option<f32>,
    pub max_distance_km: Option<f64>,
    pub interest: Option<String>,
}

/// Discover controller
#[derive(Debug)]
pub struct DiscoverScreen {
    config: AppConfig,
    hosts: Vec<User>,
    pub filters: DiscoverFilters,
    viewer_location: Option<Coordinates>,
    location_error: Option<String>,
    loading: bool,
}

impl DiscoverScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            hosts: Vec::new(),
            filters: DiscoverFilters::default(),
            viewer_location: None,
            location_error: None,
            loading: false,
        }
    }

    pub fn hosts(&self) -> &[User] {
        &self.hosts
    }

    pub fn viewer_location(&self) -> Option<Coordinates> {
        self.viewer_location
    }

    /// The geolocation failure shown next to the retry button, if any
    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load the host grid and resolve the viewer's location
    ///
    /// A location failure does not fail the load; the distance filter
    /// just stays inert until a retry succeeds.
    pub async fn load<L: LocationProvider + ?Sized>(&mut self, rng: &mut impl Rng, location: &L) {
        self.loading = true;
        info!("Loading hosts");
        simulate_delay(&self.config, 1).await;

        self.hosts = mock::hosts(rng, PAGE_SIZE);
        self.resolve_location(location);
        self.loading = false;
    }

    /// Append another page of hosts
    pub async fn load_more(&mut self, rng: &mut impl Rng) {
        if self.loading {
            return;
        }
        self.loading = true;
        simulate_delay(&self.config, 1).await;
        self.hosts.extend(mock::hosts(rng, PAGE_SIZE));
        self.loading = false;
    }

    /// Retry the geolocation request after a denial or timeout
    pub fn retry_location<L: LocationProvider + ?Sized>(&mut self, location: &L) {
        self.resolve_location(location);
    }

    fn resolve_location<L: LocationProvider + ?Sized>(&mut self, location: &L) {
        match location.current_location() {
            Ok(coords) => {
                self.viewer_location = Some(coords);
                self.location_error = None;
            }
            Err(e) => {
                warn!(error = %e, "Geolocation unavailable");
                self.viewer_location = None;
                self.location_error = Some(e.to_string());
            }
        }
    }

    /// Distance from the viewer to a host's city, when both resolve
    pub fn distance_to(&self, host: &User) -> Option<f64> {
        let viewer = self.viewer_location?;
        let host_coords = geo::geocode(&host.location)?;
        Some(geo::distance_km(viewer, host_coords))
    }

    /// The host grid with all active filters applied
    pub fn filtered(&self) -> Vec<&User> {
        self.hosts
            .iter()
            .filter(|host| {
                if let Some(gender) = self.filters.gender {
                    if host.gender != gender {
                        return false;
                    }
                }
                if let Some(min) = self.filters.min_rating {
                    if host.rating < min {
                        return false;
                    }
                }
                if let Some(interest) = &self.filters.interest {
                    if !host.interests.iter().any(|i| i == interest) {
                        return false;
                    }
                }
                if let Some(max_km) = self.filters.max_distance_km {
                    // Hosts whose city cannot be resolved stay in;
                    // the filter only drops hosts known to be far
                    if let Some(km) = self.distance_to(host) {
                        if km > max_km {
                            return false;
                        }
                    }
                }
                true
            })
            .collect()
    }

    /// Flip the follow flag on a host card; returns the new flag
    pub fn toggle_follow(&mut self, host_id: Uuid) -> Option<bool> {
        let host = self.hosts.iter_mut().find(|h| h.id == host_id)?;
        host.followed_by_me = !host.followed_by_me;
        if host.followed_by_me {
            host.followers += 1;
        } else {
            host.followers = host.followers.saturating_sub(1);
        }
        Some(host.followed_by_me)
    }
}
