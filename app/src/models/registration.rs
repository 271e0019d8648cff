//! Transient registration form state

use serde::{Deserialize, Serialize};

use super::Gender;

/// How the account is being verified
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMethod {
    Phone,
    Email,
}

/// Form state spanning the registration wizard's steps
///
/// Filled in step by step, folded into a [`super::User`] on completion,
/// and discarded. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationData {
    pub method: Option<RegistrationMethod>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub otp_verified: bool,
    pub display_name: String,
    pub handle: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub password: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub photos: Vec<String>,
    pub face_enrolled: bool,
}

impl RegistrationData {
    /// The contact value for the chosen method, once entered
    pub fn contact(&self) -> Option<&str> {
        match self.method? {
            RegistrationMethod::Phone => self.phone.as_deref(),
            RegistrationMethod::Email => self.email.as_deref(),
        }
    }
}
