//! Booking model for paid chat sessions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorRef;

/// Booking lifecycle state
///
/// Fixed at creation; the only post-creation transition is a local
/// cancel on the bookings screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Payment methods offered by the payment modal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Wallet,
    Paypal,
}

/// Booking entity for a paid chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub host: AuthorRef,
    /// Rate at booking time, USD per hour
    pub hourly_rate: u32,
    /// Scheduled session start
    pub date: DateTime<Utc>,
    pub duration_mins: u32,
    pub amount_usd: u32,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}
