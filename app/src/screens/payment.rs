//! Payment modal for booking a paid chat session

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::models::{Booking, BookingStatus, PaymentMethod, User};

/// Modal stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStage {
    Select,
    Processing,
    Done,
}

/// Payment controller
///
/// There is no payment processor behind this: `pay` always succeeds
/// after its simulated processing delay and mints an upcoming booking.
#[derive(Debug)]
pub struct PaymentModal {
    config: AppConfig,
    host: User,
    date: DateTime<Utc>,
    duration_mins: u32,
    method: PaymentMethod,
    stage: PaymentStage,
}

impl PaymentModal {
    /// Open the modal for a session with the host
    pub fn new(config: AppConfig, host: User, duration_mins: u32) -> Self {
        Self {
            config,
            host,
            date: Utc::now() + Duration::hours(1),
            duration_mins,
            method: PaymentMethod::Card,
            stage: PaymentStage::Select,
        }
    }

    pub fn stage(&self) -> PaymentStage {
        self.stage
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Total charge: the host's hourly rate prorated over the session,
    /// rounded up to the dollar
    pub fn amount_usd(&self) -> u32 {
        (self.host.hourly_rate * self.duration_mins).div_ceil(60)
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    /// Reschedule the session start
    pub fn set_schedule(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }

    /// Run the simulated charge and mint the booking
    pub async fn pay(&mut self) -> Result<Booking, String> {
        if self.stage != PaymentStage::Select {
            return Err("Payment already in progress".to_string());
        }

        self.stage = PaymentStage::Processing;
        info!(
            host = %self.host.display_name,
            amount = self.amount_usd(),
            "Processing payment"
        );
        simulate_delay(&self.config, 2).await;

        self.stage = PaymentStage::Done;
        Ok(Booking {
            id: Uuid::new_v4(),
            host: self.host.as_author(),
            hourly_rate: self.host.hourly_rate,
            date: self.date,
            duration_mins: self.duration_mins,
            amount_usd: self.amount_usd(),
            status: BookingStatus::Upcoming,
            payment_method: self.method,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn modal(duration_mins: u32) -> PaymentModal {
        let mut rng = StdRng::seed_from_u64(101);
        let host = mock::host(&mut rng);
        PaymentModal::new(AppConfig::instant(), host, duration_mins)
    }

    #[test]
    fn test_amount_prorates_and_rounds_up() {
        let modal = modal(90);
        let rate = modal.host.hourly_rate;
        assert_eq!(modal.amount_usd(), (rate * 90).div_ceil(60));
    }

    #[tokio::test]
    async fn test_pay_mints_an_upcoming_booking() {
        let mut modal = modal(60);
        modal.select_method(PaymentMethod::Wallet);

        let booking = modal.pay().await.unwrap();
        assert_eq!(modal.stage(), PaymentStage::Done);
        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(booking.payment_method, PaymentMethod::Wallet);
        assert_eq!(booking.duration_mins, 60);
        assert_eq!(booking.host.id, modal.host.id);
    }

    #[tokio::test]
    async fn test_pay_twice_is_rejected() {
        let mut modal = modal(30);
        modal.pay().await.unwrap();
        assert!(modal.pay().await.is_err());
    }
}
