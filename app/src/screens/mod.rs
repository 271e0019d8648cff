//! Screen controllers
//!
//! One controller per screen. State is created on entry ("mount"),
//! filled with mock data behind a simulated delay, mutated
//! optimistically in place, and discarded on leave. Controllers share
//! nothing; the same logical entity rendered by two screens is two
//! unrelated copies.

pub mod bookings;
pub mod chat;
pub mod discover;
pub mod feed;
pub mod help_support;
pub mod login;
pub mod messages;
pub mod payment;
pub mod profile;
pub mod search;
pub mod settings;
pub mod side_menu;
pub mod trending;
pub mod wishlist;
