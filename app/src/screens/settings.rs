//! Settings screen: notification/privacy toggles and account fields

use tracing::info;

use crate::config::AppConfig;
use crate::models::User;
use crate::validation;

/// Notification toggles
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            push: true,
            email: true,
            sms: false,
        }
    }
}

/// Privacy toggles
#[derive(Debug, Clone)]
pub struct PrivacySettings {
    pub show_online: bool,
    pub show_distance: bool,
    pub read_receipts: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_online: true,
            show_distance: true,
            read_receipts: true,
        }
    }
}

/// Settings controller
///
/// Toggles live only here; account edits write through to the caller's
/// in-memory user and evaporate on reload like everything else.
#[derive(Debug, Default)]
pub struct SettingsScreen {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    error: Option<String>,
}

impl SettingsScreen {
    pub fn new(_config: AppConfig) -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and apply account edits to the signed-in user
    pub fn apply_profile(
        &mut self,
        user: &mut User,
        display_name: &str,
        bio: &str,
    ) -> Result<(), String> {
        if let Err(e) = validation::validate_display_name(display_name) {
            self.error = Some(e.clone());
            return Err(e);
        }
        if bio.len() > 300 {
            let e = "Bio must be at most 300 characters long".to_string();
            self.error = Some(e.clone());
            return Err(e);
        }

        self.error = None;
        user.display_name = display_name.trim().to_string();
        user.bio = bio.trim().to_string();
        info!("Profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let screen = SettingsScreen::new(AppConfig::instant());
        assert!(screen.notifications.push);
        assert!(!screen.notifications.sms);
        assert!(screen.privacy.read_receipts);
    }

    #[test]
    fn test_apply_profile_edits_user_in_place() {
        let mut rng = StdRng::seed_from_u64(91);
        let mut user = mock::current_user(&mut rng, "sam@example.com");
        let mut screen = SettingsScreen::new(AppConfig::instant());

        screen
            .apply_profile(&mut user, "Sam R.", "hello there")
            .unwrap();
        assert_eq!(user.display_name, "Sam R.");
        assert_eq!(user.bio, "hello there");

        assert!(screen.apply_profile(&mut user, "  ", "bio").is_err());
        assert_eq!(user.display_name, "Sam R.");
        assert!(screen.error().is_some());
    }
}
