//! Device ports for the camera and geolocation boundaries
//!
//! The only external boundary the app has is the browser-style camera
//! and geolocation APIs. They are modeled as traits so the registration
//! face-enrollment flow and the discovery screens can be exercised with
//! simulated devices, including the permission-denied paths that the UI
//! surfaces as a retry button.

use common::error::{AppError, AppResult};
use common::geo::Coordinates;

/// A single frame captured during face enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub index: u32,
    pub width: u32,
    pub height: u32,
}

/// Camera access, as exposed by the platform
pub trait CameraDevice {
    /// Request camera access; maps to the platform permission prompt
    fn open(&mut self) -> AppResult<()>;

    /// Capture one frame from the open camera
    fn capture_frame(&mut self) -> AppResult<CapturedFrame>;
}

/// Geolocation access, as exposed by the platform
pub trait LocationProvider {
    /// Resolve the viewer's current coordinates
    fn current_location(&self) -> AppResult<Coordinates>;
}

/// How a simulated device responds to a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

/// In-memory camera used by the demo driver and tests
#[derive(Debug)]
pub struct SimulatedCamera {
    permission: PermissionState,
    opened: bool,
    frames_served: u32,
}

impl SimulatedCamera {
    /// A camera whose permission prompt is accepted
    pub fn granted() -> Self {
        Self {
            permission: PermissionState::Granted,
            opened: false,
            frames_served: 0,
        }
    }

    /// A camera whose permission prompt is denied
    pub fn denied() -> Self {
        Self {
            permission: PermissionState::Denied,
            opened: false,
            frames_served: 0,
        }
    }

    /// Flip the permission state, as if the user changed the browser
    /// setting before pressing retry
    pub fn grant(&mut self) {
        self.permission = PermissionState::Granted;
    }

    /// Number of frames served so far
    pub fn frames_served(&self) -> u32 {
        self.frames_served
    }
}

impl CameraDevice for SimulatedCamera {
    fn open(&mut self) -> AppResult<()> {
        match self.permission {
            PermissionState::Granted => {
                self.opened = true;
                Ok(())
            }
            PermissionState::Denied => Err(AppError::PermissionDenied(
                "Camera access was denied".to_string(),
            )),
        }
    }

    fn capture_frame(&mut self) -> AppResult<CapturedFrame> {
        if !self.opened {
            return Err(AppError::DeviceUnavailable(
                "Camera is not open".to_string(),
            ));
        }

        let frame = CapturedFrame {
            index: self.frames_served,
            width: 640,
            height: 480,
        };
        self.frames_served += 1;
        Ok(frame)
    }
}

/// In-memory location provider used by the demo driver and tests
#[derive(Debug, Clone)]
pub enum SimulatedLocation {
    /// Resolves to a fixed coordinate pair
    Fixed(Coordinates),
    /// Rejects with a permission denial
    Denied,
    /// Rejects with a timeout
    TimedOut,
}

impl LocationProvider for SimulatedLocation {
    fn current_location(&self) -> AppResult<Coordinates> {
        match self {
            SimulatedLocation::Fixed(coords) => Ok(*coords),
            SimulatedLocation::Denied => Err(AppError::PermissionDenied(
                "Location access was denied".to_string(),
            )),
            SimulatedLocation::TimedOut => Err(AppError::Timeout(
                "Location request timed out".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_capture_requires_open() {
        let mut camera = SimulatedCamera::granted();
        assert!(matches!(
            camera.capture_frame(),
            Err(AppError::DeviceUnavailable(_))
        ));

        camera.open().unwrap();
        let frame = camera.capture_frame().unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(camera.capture_frame().unwrap().index, 1);
    }

    #[test]
    fn test_denied_camera_can_be_granted_for_retry() {
        let mut camera = SimulatedCamera::denied();
        assert!(matches!(
            camera.open(),
            Err(AppError::PermissionDenied(_))
        ));

        camera.grant();
        assert!(camera.open().is_ok());
    }

    #[test]
    fn test_location_provider_modes() {
        let fixed = SimulatedLocation::Fixed(Coordinates::new(40.7128, -74.0060));
        assert!(fixed.current_location().is_ok());

        assert!(matches!(
            SimulatedLocation::Denied.current_location(),
            Err(AppError::PermissionDenied(_))
        ));
        assert!(matches!(
            SimulatedLocation::TimedOut.current_location(),
            Err(AppError::Timeout(_))
        ));
    }
}
