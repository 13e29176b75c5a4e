//! Orientation extraction and attitude normalization

use core::f64::consts::FRAC_PI_2;

use nalgebra::{ComplexField, Matrix3, RealField};

use crate::math::wrap_to_pi;
use crate::rotation::RotationVector;
use crate::sensor::SensorType;
use crate::types::{EstimatorSettings, OrientationSample, ReferenceFrame};

/// Convert a rotation-vector sample into roll, pitch and yaw
///
/// Derives the rotation matrix and extracts the orientation from it. The
/// sensor reports azimuth and pitch with the opposite sign to the output
/// convention, so yaw is `-azimuth` and pitch is negated.
///
/// # Example
/// ```
/// use absolute_sensor::{RotationVector, matrix_to_orientation};
///
/// let flat = matrix_to_orientation(&RotationVector::default());
/// assert!(flat.roll.abs() < 1e-12);
/// assert!(flat.pitch.abs() < 1e-12);
/// assert!(flat.yaw.abs() < 1e-12);
/// ```
pub fn matrix_to_orientation(rotation_vector: &RotationVector) -> OrientationSample {
    rotation_matrix_to_orientation(&rotation_vector.rotation_matrix())
}

/// Extract roll, pitch and yaw from a row-major rotation matrix
///
/// Element `(2, 1)` is clamped to [-1, 1] before the arcsine. Floating point
/// drift near a vertical device otherwise yields NaN pitch.
pub fn rotation_matrix_to_orientation(matrix: &Matrix3<f64>) -> OrientationSample {
    let pitch_sine = matrix[(2, 1)].clamp(-1.0, 1.0);

    let azimuth = matrix[(0, 1)].atan2(matrix[(1, 1)]);
    let raw_pitch = (-pitch_sine).asin();
    let raw_roll = (-matrix[(2, 0)]).atan2(matrix[(2, 2)]);

    OrientationSample {
        roll: raw_roll,
        pitch: -raw_pitch,
        yaw: -azimuth,
    }
}

/// Normalize Euler attitude reported by a platform motion API
///
/// Roll and pitch pass through untouched. In the magnetic-north frame the
/// zero heading is shifted by 90° and yaw is wrapped back into (-π, π],
/// computed as `((yaw + π + π/2) mod 2π) - π`. A reported yaw of 0 becomes
/// +π/2. Outside that frame yaw is returned as given, whatever its range.
///
/// # Example
/// ```
/// use absolute_sensor::{ReferenceFrame, attitude_to_orientation};
/// use core::f64::consts::FRAC_PI_2;
///
/// let sample = attitude_to_orientation(0.1, 0.2, 0.0, ReferenceFrame::MagneticNorthZVertical);
/// assert!((sample.yaw - FRAC_PI_2).abs() < 1e-9);
/// assert_eq!((sample.roll, sample.pitch), (0.1, 0.2));
/// ```
pub fn attitude_to_orientation(
    roll: f64,
    pitch: f64,
    yaw: f64,
    frame: ReferenceFrame,
) -> OrientationSample {
    let yaw = match frame {
        ReferenceFrame::ArbitraryZVertical => yaw,
        ReferenceFrame::MagneticNorthZVertical => wrap_to_pi(yaw + FRAC_PI_2),
    };

    OrientationSample { roll, pitch, yaw }
}

/// Orientation estimator bound to one reference frame
///
/// Holds no state between samples. Each call is an independent, pure
/// conversion, so a single estimator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationEstimator {
    settings: EstimatorSettings,
}

impl OrientationEstimator {
    /// Create an estimator for the arbitrary-heading frame
    pub fn new() -> Self {
        Self::with_settings(EstimatorSettings::default())
    }

    /// Create an estimator with specified settings
    pub fn with_settings(settings: EstimatorSettings) -> Self {
        log::debug!(
            "orientation estimator using {:?} reference frame",
            settings.reference_frame
        );
        Self { settings }
    }

    /// Get current settings
    pub fn settings(&self) -> EstimatorSettings {
        self.settings
    }

    /// Update settings
    pub fn set_settings(&mut self, settings: EstimatorSettings) {
        self.settings = settings;
    }

    /// Frame samples are interpreted in
    pub fn reference_frame(&self) -> ReferenceFrame {
        self.settings.reference_frame
    }

    /// Sensor stream that feeds this estimator
    pub fn sensor_type(&self) -> SensorType {
        match self.settings.reference_frame {
            ReferenceFrame::ArbitraryZVertical => SensorType::Orientation,
            ReferenceFrame::MagneticNorthZVertical => SensorType::AbsoluteOrientation,
        }
    }

    /// Convert a rotation-vector sample
    ///
    /// The frame only selects which rotation-vector stream feeds the
    /// estimator upstream; the extraction is the same for both.
    pub fn estimate_from_rotation_vector(
        &self,
        rotation_vector: &RotationVector,
    ) -> OrientationSample {
        matrix_to_orientation(rotation_vector)
    }

    /// Normalize platform Euler attitude in the configured frame
    pub fn estimate_from_attitude(&self, roll: f64, pitch: f64, yaw: f64) -> OrientationSample {
        attitude_to_orientation(roll, pitch, yaw, self.settings.reference_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_flat_device_is_level() {
        let sample = matrix_to_orientation(&RotationVector::default());
        assert!(sample.roll.abs() < EPSILON);
        assert!(sample.pitch.abs() < EPSILON);
        assert!(sample.yaw.abs() < EPSILON);
    }

    #[test]
    fn test_pitch_sine_clamped_above_one() {
        let mut matrix = Matrix3::identity();
        matrix[(2, 1)] = 1.000_000_1;
        matrix[(2, 2)] = 0.0;
        matrix[(1, 1)] = 0.0;
        matrix[(1, 2)] = -1.0;

        let sample = rotation_matrix_to_orientation(&matrix);
        assert!(sample.is_finite());
        assert!((sample.pitch - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_sine_clamped_below_minus_one() {
        let mut matrix = Matrix3::identity();
        matrix[(2, 1)] = -1.000_000_1;

        let sample = rotation_matrix_to_orientation(&matrix);
        assert!(sample.is_finite());
        assert!((sample.pitch + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_sign_convention() {
        // 30° about Z: raw azimuth is -30°, reported yaw is +30°
        let angle = PI / 6.0;
        let rv = RotationVector::new(0.0, 0.0, (angle / 2.0).sin(), (angle / 2.0).cos());
        let sample = matrix_to_orientation(&rv);
        assert!((sample.yaw - angle).abs() < EPSILON);
        assert!(sample.pitch.abs() < EPSILON);
        assert!(sample.roll.abs() < EPSILON);
    }

    #[test]
    fn test_arbitrary_frame_passthrough() {
        let sample =
            attitude_to_orientation(0.25, -0.5, 2.75, ReferenceFrame::ArbitraryZVertical);
        assert_eq!(sample, OrientationSample::new(0.25, -0.5, 2.75));
    }

    #[test]
    fn test_magnetic_north_shift() {
        let frame = ReferenceFrame::MagneticNorthZVertical;
        assert!((attitude_to_orientation(0.0, 0.0, 0.0, frame).yaw - FRAC_PI_2).abs() < EPSILON);
        assert!((attitude_to_orientation(0.0, 0.0, -FRAC_PI_2, frame).yaw).abs() < EPSILON);
        assert!((attitude_to_orientation(0.0, 0.0, -PI, frame).yaw + FRAC_PI_2).abs() < EPSILON);
        assert!((attitude_to_orientation(0.0, 0.0, PI, frame).yaw + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_zero_heading_maps_to_plus_ninety_degrees() {
        let sample = attitude_to_orientation(0.0, 0.0, 0.0, ReferenceFrame::MagneticNorthZVertical);
        assert!((sample.yaw.to_degrees() - 90.0).abs() < EPSILON);
        assert!(sample.yaw > 0.0);
    }

    #[test]
    fn test_yaw_range_only_enforced_for_magnetic_north() {
        let yaw = 1.5 * PI;
        let arbitrary = attitude_to_orientation(0.0, 0.0, yaw, ReferenceFrame::ArbitraryZVertical);
        assert_eq!(arbitrary.yaw, yaw);

        let magnetic =
            attitude_to_orientation(0.0, 0.0, yaw, ReferenceFrame::MagneticNorthZVertical);
        assert!(magnetic.yaw > -PI && magnetic.yaw <= PI);
        assert!(magnetic.yaw.abs() < EPSILON);
    }

    #[test]
    fn test_estimator_frames() {
        let estimator = OrientationEstimator::new();
        assert_eq!(estimator.reference_frame(), ReferenceFrame::ArbitraryZVertical);
        assert_eq!(estimator.sensor_type(), SensorType::Orientation);
        assert_eq!(estimator.estimate_from_attitude(0.1, 0.2, 0.3).yaw, 0.3);

        let mut estimator = estimator;
        estimator.set_settings(EstimatorSettings {
            reference_frame: ReferenceFrame::MagneticNorthZVertical,
        });
        assert_eq!(estimator.sensor_type(), SensorType::AbsoluteOrientation);
        assert!((estimator.estimate_from_attitude(0.1, 0.2, 0.0).yaw - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_vector_ignores_frame() {
        let rv = RotationVector::new(0.1, 0.2, 0.3, 0.927_361_849_549_570_4);
        let arbitrary = OrientationEstimator::new();
        let magnetic = OrientationEstimator::with_settings(EstimatorSettings {
            reference_frame: ReferenceFrame::MagneticNorthZVertical,
        });

        assert_eq!(
            arbitrary.estimate_from_rotation_vector(&rv),
            magnetic.estimate_from_rotation_vector(&rv)
        );
    }
}
