//! Bookings screen: session history under status tabs

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::{Booking, BookingStatus};

const HISTORY_SIZE: usize = 9;

/// Bookings controller
#[derive(Debug)]
pub struct BookingsScreen {
    config: AppConfig,
    bookings: Vec<Booking>,
    tab: BookingStatus,
    loading: bool,
}

impl BookingsScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            bookings: Vec::new(),
            tab: BookingStatus::Upcoming,
            loading: false,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn tab(&self) -> BookingStatus {
        self.tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generate the booking history, with the session's own bookings
    /// pinned on top
    pub async fn load(&mut self, rng: &mut impl Rng, session_bookings: &[Booking]) {
        self.loading = true;
        info!("Loading bookings");
        simulate_delay(&self.config, 1).await;

        let mut bookings: Vec<Booking> = session_bookings.to_vec();
        bookings.extend((0..HISTORY_SIZE).map(|_| mock::booking(rng)));
        self.bookings = bookings;
        self.loading = false;
    }

    pub fn select_tab(&mut self, tab: BookingStatus) {
        self.tab = tab;
    }

    /// Bookings under the selected tab
    pub fn visible(&self) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.status == self.tab)
            .collect()
    }

    /// Cancel an upcoming booking in place
    ///
    /// The one post-creation status transition in the app; completed
    /// and already-cancelled bookings refuse it.
    pub fn cancel(&mut self, booking_id: Uuid) -> Result<(), String> {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == booking_id) else {
            return Err("Booking not found".to_string());
        };

        if booking.status != BookingStatus::Upcoming {
            return Err("Only upcoming bookings can be cancelled".to_string());
        }

        booking.status = BookingStatus::Cancelled;
        info!(booking = %booking_id, "Booking cancelled");
        Ok(())
    }
}
