//! Core types and conventions for orientation estimation

use nalgebra::Vector3;

use crate::math::RAD_TO_DEG;

/// Attitude reference frame
///
/// Both frames are gravity aligned (Z vertical). They differ only in what
/// the zero heading means, which affects yaw normalization and nothing else.
///
/// # Example
/// ```
/// use absolute_sensor::{EstimatorSettings, OrientationEstimator, ReferenceFrame};
///
/// let settings = EstimatorSettings {
///     reference_frame: ReferenceFrame::MagneticNorthZVertical,
/// };
/// let estimator = OrientationEstimator::with_settings(settings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceFrame {
    /// Gravity aligned, initial heading arbitrary
    #[default]
    ArbitraryZVertical,
    /// Gravity aligned, heading referenced to magnetic north
    MagneticNorthZVertical,
}

/// Orientation estimator settings
///
/// # Example
/// ```
/// use absolute_sensor::{EstimatorSettings, ReferenceFrame};
///
/// let settings = EstimatorSettings::default();
/// assert_eq!(settings.reference_frame, ReferenceFrame::ArbitraryZVertical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorSettings {
    /// Frame the upstream sensor stream reports attitude in
    pub reference_frame: ReferenceFrame,
}

/// Device orientation as roll, pitch and yaw in radians
///
/// Produced once per input sample and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationSample {
    /// Rotation about the device Y axis
    pub roll: f64,
    /// Rotation about the device X axis
    pub pitch: f64,
    /// Heading about the vertical axis
    ///
    /// Wrapped into (-π, π] for attitude in the magnetic-north frame. Other
    /// sources keep the range they were reported in.
    pub yaw: f64,
}

impl OrientationSample {
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Same sample expressed in degrees
    pub fn to_degrees(&self) -> Self {
        Self {
            roll: self.roll * RAD_TO_DEG,
            pitch: self.pitch * RAD_TO_DEG,
            yaw: self.yaw * RAD_TO_DEG,
        }
    }

    /// True when none of the angles is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.roll.is_finite() && self.pitch.is_finite() && self.yaw.is_finite()
    }
}

impl From<OrientationSample> for Vector3<f64> {
    /// Packs the sample as `(roll, pitch, yaw)`
    fn from(sample: OrientationSample) -> Self {
        Vector3::new(sample.roll, sample.pitch, sample.yaw)
    }
}

/// Raw tri-axial sample from the accelerometer, user acceleration,
/// gyroscope or magnetometer streams.
///
/// These are forwarded as-is; units are whatever the platform reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MotionVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3<f64>> for MotionVector {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<MotionVector> for Vector3<f64> {
    fn from(v: MotionVector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for MotionVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
