#![no_std]

//! Absolute Sensor - orientation estimation for mobile motion-sensor bridges
//!
//! Converts the attitude reported by a phone's fused motion sensors into a
//! `{roll, pitch, yaw}` triple with a consistent sign and heading convention
//! across platforms. Two inputs are supported:
//!
//! - Rotation-vector samples (quaternion from the sensor hub), converted via
//!   the rotation matrix with a clamp on the pitch sine near gimbal lock
//! - Euler attitude from a device-motion API, with the yaw zero re-referenced
//!   when the stream is relative to magnetic north
//!
//! Alongside the estimator the crate carries the small pieces of the sensor
//! bridge that are independent of any OS: the sensor stream identifiers, the
//! raw `{x, y, z}` sample shape and the screen rotation mapping. Talking to
//! the platform sensor APIs is left to the caller.
//!
//! # Features
//!
//! - `#![no_std]`, no allocation, every conversion is a pure function
//! - `serde`: serialize samples in the `{roll, pitch, yaw}` / `{x, y, z}` wire shape
//! - `defmt-03`: `defmt::Format` for all public types
//!
//! # Quick Start
//!
//! ```rust
//! use absolute_sensor::{OrientationEstimator, ReferenceFrame, RotationVector, attitude_to_orientation};
//!
//! let estimator = OrientationEstimator::new();
//!
//! // Rotation-vector sensor payload [x, y, z, w]
//! let rotation_vector = RotationVector::from_slice(&[0.0, 0.0, 0.3826834, 0.9238795]).unwrap();
//! let sample = estimator.estimate_from_rotation_vector(&rotation_vector);
//! assert!((sample.yaw.to_degrees() - 45.0).abs() < 1e-3);
//!
//! // Device-motion attitude in the magnetic-north frame
//! let absolute = attitude_to_orientation(0.0, 0.0, 0.0, ReferenceFrame::MagneticNorthZVertical);
//! assert!((absolute.yaw.to_degrees() - 90.0).abs() < 1e-9);
//! ```

pub mod error;
mod estimator;
mod math;
mod rotation;
pub mod screen;
pub mod sensor;
mod types;

// Re-export all public types and functions
pub use error::Error;
pub use estimator::{
    OrientationEstimator, attitude_to_orientation, matrix_to_orientation,
    rotation_matrix_to_orientation,
};
pub use math::{DEG_TO_RAD, RAD_TO_DEG, wrap_to_pi};
pub use rotation::RotationVector;
pub use screen::{ScreenOrientation, ScreenOrientationTracker};
pub use sensor::{METHOD_CHANNEL, SCREEN_ORIENTATION_CHANNEL, SensorType};
pub use types::*;
