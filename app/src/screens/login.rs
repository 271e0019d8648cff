//! Login screen

use rand::Rng;
use tracing::info;

use crate::config::{AppConfig, simulate_delay};
use crate::mock;
use crate::models::User;
use crate::validation;

/// Email/password sign-in form
///
/// There is no credential store: any well-formed input signs in a
/// freshly generated user after the simulated round-trip.
#[derive(Debug)]
pub struct LoginScreen {
    config: AppConfig,
    error: Option<String>,
    signing_in: bool,
}

impl LoginScreen {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            error: None,
            signing_in: false,
        }
    }

    /// The inline error from the last attempt, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a sign-in is in flight
    pub fn is_signing_in(&self) -> bool {
        self.signing_in
    }

    /// Validate the form and run the simulated sign-in
    pub async fn sign_in(
        &mut self,
        email: &str,
        password: &str,
        rng: &mut impl Rng,
    ) -> Result<User, String> {
        if let Err(e) = validation::validate_email(email) {
            self.error = Some(e.clone());
            return Err(e);
        }
        if password.is_empty() {
            let e = "Password is required".to_string();
            self.error = Some(e.clone());
            return Err(e);
        }

        self.error = None;
        self.signing_in = true;
        info!(email, "Signing in");
        simulate_delay(&self.config, 1).await;
        self.signing_in = false;

        Ok(mock::current_user(rng, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_sign_in_requires_valid_email() {
        let mut screen = LoginScreen::new(AppConfig::instant());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(screen.sign_in("nope", "Secret1x", &mut rng).await.is_err());
        assert!(screen.error().is_some());
    }

    #[tokio::test]
    async fn test_sign_in_requires_password() {
        let mut screen = LoginScreen::new(AppConfig::instant());
        let mut rng = StdRng::seed_from_u64(1);

        let err = screen
            .sign_in("sam@example.com", "", &mut rng)
            .await
            .unwrap_err();
        assert_eq!(err, "Password is required");
    }

    #[tokio::test]
    async fn test_sign_in_succeeds_with_valid_form() {
        let mut screen = LoginScreen::new(AppConfig::instant());
        let mut rng = StdRng::seed_from_u64(1);

        let user = screen
            .sign_in("sam@example.com", "anything", &mut rng)
            .await
            .unwrap();
        assert_eq!(user.display_name, "sam");
        assert!(screen.error().is_none());
        assert!(!screen.is_signing_in());
    }
}
