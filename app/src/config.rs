//! Application configuration
//!
//! Every "network call" in the app is simulated, so the only tunables
//! are the simulated-latency unit and the countdown windows derived
//! from it. Tests run with latency disabled.

use std::time::Duration;

use common::error::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Whether simulated delays actually sleep
    pub simulate_latency: bool,
    /// Base simulated-latency unit in milliseconds
    pub latency_ms: u64,
    /// Cooldown between OTP resends in seconds
    pub otp_resend_cooldown_secs: u64,
    /// Default paid chat session length in minutes
    pub chat_session_mins: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            latency_ms: 1000,
            otp_resend_cooldown_secs: 30,
            chat_session_mins: 30,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `AMITY_SIMULATE_LATENCY`: Whether simulated delays sleep (default: true)
    /// - `AMITY_LATENCY_MS`: Base simulated-latency unit in ms (default: 1000)
    /// - `AMITY_OTP_RESEND_COOLDOWN_SECS`: OTP resend cooldown (default: 30)
    /// - `AMITY_CHAT_SESSION_MINS`: Default session length (default: 30)
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let simulate_latency = std::env::var("AMITY_SIMULATE_LATENCY")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(defaults.simulate_latency);

        let latency_ms = std::env::var("AMITY_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.latency_ms);

        let otp_resend_cooldown_secs = std::env::var("AMITY_OTP_RESEND_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.otp_resend_cooldown_secs);

        let chat_session_mins = std::env::var("AMITY_CHAT_SESSION_MINS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.chat_session_mins);

        if chat_session_mins == 0 {
            return Err(AppError::Configuration(
                "AMITY_CHAT_SESSION_MINS must be positive".to_string(),
            ));
        }

        Ok(AppConfig {
            simulate_latency,
            latency_ms,
            otp_resend_cooldown_secs,
            chat_session_mins,
        })
    }

    /// Configuration with latency disabled, for tests and scripted runs
    pub fn instant() -> Self {
        Self {
            simulate_latency: false,
            ..Self::default()
        }
    }

    /// One simulated-latency unit
    ///
    /// Callers scale this for slower interactions ("processing payment"
    /// is two units) and divide it for snappy ones.
    pub fn latency(&self) -> Duration {
        if self.simulate_latency {
            Duration::from_millis(self.latency_ms)
        } else {
            Duration::ZERO
        }
    }
}

/// Sleep for the given number of simulated-latency units
pub async fn simulate_delay(config: &AppConfig, units: u32) {
    let delay = config.latency() * units;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
