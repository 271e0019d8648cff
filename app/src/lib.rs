//! Amity client core
//!
//! The headless core of the Amity companion-chat client: a view router
//! over per-screen controllers, a multi-step registration wizard, and
//! the validation/geo/mock plumbing they share. Everything is
//! in-memory and regenerated per screen mount; there is no backend and
//! nothing survives a restart.

pub mod config;
pub mod devices;
pub mod mock;
pub mod models;
pub mod registration;
pub mod screens;
pub mod state;
pub mod validation;
