//! Registration wizard
//!
//! A sequential step index drives which form is active; each submit
//! validates its own fields synchronously, runs its simulated network
//! call, and advances the index by one. "Back" decrements it.
//! Validation failures are static strings on the wizard and leave the
//! step unchanged.

pub mod face_enrollment;

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, simulate_delay};
use crate::models::{Gender, RegistrationData, RegistrationMethod, User};
use crate::validation;

/// Handles that always come back as taken from the availability check
const TAKEN_HANDLES: &[&str] = &["#admin", "#amity", "#support", "#host", "#moderator"];

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    MethodSelect,
    ContactEntry,
    OtpVerify,
    ProfileDetails,
    Password,
    OptionalDetails,
    FaceEnrollment,
    Success,
}

impl RegistrationStep {
    /// Zero-based index of the step, as rendered by the progress bar
    pub fn index(self) -> u8 {
        match self {
            RegistrationStep::MethodSelect => 0,
            RegistrationStep::ContactEntry => 1,
            RegistrationStep::OtpVerify => 2,
            RegistrationStep::ProfileDetails => 3,
            RegistrationStep::Password => 4,
            RegistrationStep::OptionalDetails => 5,
            RegistrationStep::FaceEnrollment => 6,
            RegistrationStep::Success => 7,
        }
    }

    fn next(self) -> RegistrationStep {
        match self {
            RegistrationStep::MethodSelect => RegistrationStep::ContactEntry,
            RegistrationStep::ContactEntry => RegistrationStep::OtpVerify,
            RegistrationStep::OtpVerify => RegistrationStep::ProfileDetails,
            RegistrationStep::ProfileDetails => RegistrationStep::Password,
            RegistrationStep::Password => RegistrationStep::OptionalDetails,
            RegistrationStep::OptionalDetails => RegistrationStep::FaceEnrollment,
            RegistrationStep::FaceEnrollment | RegistrationStep::Success => {
                RegistrationStep::Success
            }
        }
    }

    fn prev(self) -> RegistrationStep {
        match self {
            RegistrationStep::MethodSelect | RegistrationStep::ContactEntry => {
                RegistrationStep::MethodSelect
            }
            RegistrationStep::OtpVerify => RegistrationStep::ContactEntry,
            RegistrationStep::ProfileDetails => RegistrationStep::OtpVerify,
            RegistrationStep::Password => RegistrationStep::ProfileDetails,
            RegistrationStep::OptionalDetails => RegistrationStep::Password,
            RegistrationStep::FaceEnrollment => RegistrationStep::OptionalDetails,
            RegistrationStep::Success => RegistrationStep::Success,
        }
    }
}

/// Multi-step registration wizard
#[derive(Debug)]
pub struct RegistrationWizard {
    config: AppConfig,
    step: RegistrationStep,
    data: RegistrationData,
    error: Option<String>,
    otp_last_sent: Option<Instant>,
}

impl RegistrationWizard {
    /// Create a wizard at the method-select step
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            step: RegistrationStep::MethodSelect,
            data: RegistrationData::default(),
            error: None,
            otp_last_sent: None,
        }
    }

    /// The currently active step
    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    /// The error string for the active step, if the last submit failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The form state collected so far
    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    fn fail(&mut self, message: String) -> Result<(), String> {
        self.error = Some(message.clone());
        Err(message)
    }

    fn require_step(&mut self, expected: RegistrationStep) -> Result<(), String> {
        if self.step != expected {
            return self.fail("This form is not active".to_string());
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.error = None;
        self.step = self.step.next();
        info!(step = self.step.index(), "Registration advanced");
    }

    /// Step back one form; no-op on the first step and after success
    pub fn back(&mut self) {
        if self.step == RegistrationStep::Success {
            return;
        }
        self.error = None;
        self.step = self.step.prev();
    }

    /// Step 0: choose phone or email verification
    pub fn select_method(&mut self, method: RegistrationMethod) -> Result<(), String> {
        self.require_step(RegistrationStep::MethodSelect)?;
        self.data.method = Some(method);
        self.advance();
        Ok(())
    }

    /// Step 1: enter the phone number or email and send the code
    ///
    /// The step only advances once the simulated send resolves; invalid
    /// input keeps the wizard here with a populated error string.
    pub async fn submit_contact(&mut self, value: &str) -> Result<(), String> {
        self.require_step(RegistrationStep::ContactEntry)?;

        let method = self
            .data
            .method
            .expect("method is set before contact entry");
        match method {
            RegistrationMethod::Phone => {
                if let Err(e) = validation::validate_phone(value) {
                    return self.fail(e);
                }
                self.data.phone = Some(value.to_string());
            }
            RegistrationMethod::Email => {
                if let Err(e) = validation::validate_email(value) {
                    return self.fail(e);
                }
                self.data.email = Some(value.to_string());
            }
        }

        info!(?method, "Sending verification code");
        simulate_delay(&self.config, 1).await;
        self.otp_last_sent = Some(Instant::now());

        self.advance();
        Ok(())
    }

    /// Seconds left before the code can be resent
    pub fn resend_cooldown_remaining(&self) -> u64 {
        match self.otp_last_sent {
            Some(sent) => self
                .config
                .otp_resend_cooldown_secs
                .saturating_sub(sent.elapsed().as_secs()),
            None => 0,
        }
    }

    /// Resend the verification code, subject to the cooldown window
    pub async fn resend_code(&mut self) -> Result<(), String> {
        self.require_step(RegistrationStep::OtpVerify)?;

        let remaining = self.resend_cooldown_remaining();
        if remaining > 0 {
            return self.fail(format!("You can resend the code in {remaining}s"));
        }

        info!("Resending verification code");
        simulate_delay(&self.config, 1).await;
        self.otp_last_sent = Some(Instant::now());
        self.error = None;
        Ok(())
    }

    /// Step 2: verify the one-time passcode
    ///
    /// Any well-formed 6-digit code passes; the mock verification never
    /// rejects.
    pub async fn submit_otp(&mut self, code: &str) -> Result<(), String> {
        self.require_step(RegistrationStep::OtpVerify)?;

        if let Err(e) = validation::validate_otp(code) {
            return self.fail(e);
        }

        info!("Verifying code");
        simulate_delay(&self.config, 1).await;
        self.data.otp_verified = true;

        self.advance();
        Ok(())
    }

    /// Step 3: display name, handle, age, and gender
    ///
    /// The handle is checked against a hardcoded deny-list behind an
    /// artificial one-unit delay; a taken handle keeps the wizard here.
    pub async fn submit_profile(
        &mut self,
        display_name: &str,
        handle: &str,
        age: u8,
        gender: Gender,
    ) -> Result<(), String> {
        self.require_step(RegistrationStep::ProfileDetails)?;

        if let Err(e) = validation::validate_display_name(display_name) {
            return self.fail(e);
        }
        if let Err(e) = validation::validate_handle(handle) {
            return self.fail(e);
        }
        if let Err(e) = validation::validate_age(age) {
            return self.fail(e);
        }

        info!(handle, "Checking handle availability");
        simulate_delay(&self.config, 1).await;
        if TAKEN_HANDLES.contains(&handle) {
            return self.fail("That handle is already taken".to_string());
        }

        self.data.display_name = display_name.trim().to_string();
        self.data.handle = handle.to_string();
        self.data.age = Some(age);
        self.data.gender = Some(gender);

        self.advance();
        Ok(())
    }

    /// Step 4: choose a password
    pub fn submit_password(&mut self, password: &str, confirm: &str) -> Result<(), String> {
        self.require_step(RegistrationStep::Password)?;

        if let Err(e) = validation::validate_password(password) {
            return self.fail(e);
        }
        if password != confirm {
            return self.fail("Passwords do not match".to_string());
        }

        self.data.password = password.to_string();
        self.advance();
        Ok(())
    }

    /// Step 5: bio, interests, and photos; all optional
    pub fn submit_optional(
        &mut self,
        bio: &str,
        interests: Vec<String>,
        photos: Vec<String>,
    ) -> Result<(), String> {
        self.require_step(RegistrationStep::OptionalDetails)?;

        if bio.len() > 300 {
            return self.fail("Bio must be at most 300 characters long".to_string());
        }

        self.data.bio = bio.trim().to_string();
        self.data.interests = interests;
        self.data.photos = photos;
        self.advance();
        Ok(())
    }

    /// Step 5, skipped entirely
    pub fn skip_optional(&mut self) -> Result<(), String> {
        self.require_step(RegistrationStep::OptionalDetails)?;
        self.advance();
        Ok(())
    }

    /// Step 6: record that the face-enrollment sub-flow completed
    ///
    /// The sub-flow itself lives in [`face_enrollment`]; the wizard only
    /// advances once it reports completion.
    pub fn finish_face_enrollment(&mut self) -> Result<(), String> {
        self.require_step(RegistrationStep::FaceEnrollment)?;
        self.data.face_enrolled = true;
        self.advance();
        Ok(())
    }

    /// Fold the collected form state into a new user
    ///
    /// Only valid on the success step. The transient form state is
    /// consumed; nothing else retains it.
    pub fn complete(self) -> Result<User, String> {
        if self.step != RegistrationStep::Success {
            return Err("Registration is not complete".to_string());
        }

        let avatar_url = self
            .data
            .photos
            .first()
            .cloned()
            .unwrap_or_else(|| "https://picsum.photos/seed/new-user/200/200".to_string());

        Ok(User {
            id: Uuid::new_v4(),
            handle: self.data.handle,
            display_name: self.data.display_name,
            avatar_url,
            bio: self.data.bio,
            age: self.data.age.unwrap_or(18),
            location: String::new(),
            gender: self.data.gender.unwrap_or(Gender::NonBinary),
            rating: 0.0,
            hourly_rate: 0,
            is_host: false,
            is_online: true,
            followed_by_me: false,
            interests: self.data.interests,
            photos: self.data.photos,
            followers: 0,
            following: 0,
            created_at: Utc::now(),
        })
    }
}
