//! Face-enrollment sub-flow
//!
//! A four-state machine inside the registration wizard: intro, a
//! fixed-count capture loop against the camera, a processing pause, and
//! done. Camera permission failure parks the flow in a failed state
//! whose only recovery is the manual retry.

use tracing::{info, warn};

use crate::config::{AppConfig, simulate_delay};
use crate::devices::{CameraDevice, CapturedFrame};
use common::error::AppError;

/// Number of frames captured during a scan
pub const CAPTURE_COUNT: u32 = 6;

/// Sub-flow state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentPhase {
    Intro,
    Scanning { captured: u32 },
    Processing,
    Complete,
    Failed { reason: String },
}

/// Face-enrollment controller over a camera device
#[derive(Debug)]
pub struct FaceEnrollment<C: CameraDevice> {
    config: AppConfig,
    camera: C,
    phase: EnrollmentPhase,
    frames: Vec<CapturedFrame>,
}

impl<C: CameraDevice> FaceEnrollment<C> {
    /// Create the sub-flow at the intro screen
    pub fn new(config: AppConfig, camera: C) -> Self {
        Self {
            config,
            camera,
            phase: EnrollmentPhase::Intro,
            frames: Vec::new(),
        }
    }

    /// The current sub-flow state
    pub fn phase(&self) -> &EnrollmentPhase {
        &self.phase
    }

    /// Whether the scan finished
    pub fn is_complete(&self) -> bool {
        self.phase == EnrollmentPhase::Complete
    }

    /// Frames captured so far
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Run the scan: open the camera, capture the fixed frame count at
    /// one frame per latency unit, then process
    ///
    /// Only valid from the intro screen. A permission denial parks the
    /// flow in `Failed`; call [`Self::retry`] after the user re-grants.
    pub async fn start(&mut self) -> Result<(), String> {
        if self.phase != EnrollmentPhase::Intro {
            return Err("Scan already started".to_string());
        }
        self.run_scan().await
    }

    /// Retry after a camera failure
    pub async fn retry(&mut self) -> Result<(), String> {
        if !matches!(self.phase, EnrollmentPhase::Failed { .. }) {
            return Err("Nothing to retry".to_string());
        }
        self.frames.clear();
        self.run_scan().await
    }

    async fn run_scan(&mut self) -> Result<(), String> {
        if let Err(e) = self.camera.open() {
            let reason = match &e {
                AppError::PermissionDenied(msg) => msg.clone(),
                other => other.to_string(),
            };
            warn!(%reason, "Face enrollment failed to open camera");
            self.phase = EnrollmentPhase::Failed {
                reason: reason.clone(),
            };
            return Err(reason);
        }

        self.phase = EnrollmentPhase::Scanning { captured: 0 };
        info!("Face scan started");

        for i in 0..CAPTURE_COUNT {
            // One frame per second
            simulate_delay(&self.config, 1).await;
            match self.camera.capture_frame() {
                Ok(frame) => {
                    self.frames.push(frame);
                    self.phase = EnrollmentPhase::Scanning { captured: i + 1 };
                }
                Err(e) => {
                    let reason = e.to_string();
                    warn!(%reason, "Face scan lost the camera");
                    self.phase = EnrollmentPhase::Failed {
                        reason: reason.clone(),
                    };
                    return Err(reason);
                }
            }
        }

        self.phase = EnrollmentPhase::Processing;
        info!("Processing face scan");
        simulate_delay(&self.config, 2).await;

        self.phase = EnrollmentPhase::Complete;
        info!("Face enrollment complete");
        Ok(())
    }
}
