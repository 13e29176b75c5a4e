//! Rotation vector input and rotation matrix derivation

use nalgebra::{ComplexField, Matrix3, UnitQuaternion};

use crate::error::Error;

/// Device attitude as delivered by a rotation-vector sensor
///
/// The components are the quaternion `(x, y, z, w)` with `w` the scalar part.
/// The fusion firmware that produces it is trusted; values are kept exactly
/// as reported and never renormalized, so any drift reaches the matrix.
///
/// # Example
/// ```
/// use absolute_sensor::RotationVector;
///
/// // Android delivers 3, 4 or 5 floats depending on the device
/// let rv = RotationVector::from_slice(&[0.0, 0.0, 0.0, 1.0, 0.05]).unwrap();
/// assert_eq!(rv, RotationVector::new(0.0, 0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RotationVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl RotationVector {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Build from the vector part only, deriving the scalar part
    ///
    /// `w = sqrt(1 - x² - y² - z²)`, or zero when the vector part already
    /// exceeds unit length.
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        let w_squared = 1.0 - x * x - y * y - z * z;
        let w = if w_squared > 0.0 { w_squared.sqrt() } else { 0.0 };
        Self { x, y, z, w }
    }

    /// Build from a raw sensor payload
    ///
    /// Three components derive `w`, four or more take it from index 3.
    /// Anything after the fourth component (heading accuracy) is ignored.
    pub fn from_slice(values: &[f64]) -> Result<Self, Error> {
        match *values {
            [x, y, z] => Ok(Self::from_xyz(x, y, z)),
            [x, y, z, w, ..] => Ok(Self::new(x, y, z, w)),
            _ => Err(Error::TooFewComponents { len: values.len() }),
        }
    }

    /// Rotation matrix for this vector, row major
    ///
    /// Element `(2, 1)` holds the sine of the pitch angle.
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        let (q1, q2, q3, q0) = (self.x, self.y, self.z, self.w);

        let sq_q1 = 2.0 * q1 * q1;
        let sq_q2 = 2.0 * q2 * q2;
        let sq_q3 = 2.0 * q3 * q3;
        let q1_q2 = 2.0 * q1 * q2;
        let q3_q0 = 2.0 * q3 * q0;
        let q1_q3 = 2.0 * q1 * q3;
        let q2_q0 = 2.0 * q2 * q0;
        let q2_q3 = 2.0 * q2 * q3;
        let q1_q0 = 2.0 * q1 * q0;

        Matrix3::new(
            1.0 - sq_q2 - sq_q3,
            q1_q2 - q3_q0,
            q1_q3 + q2_q0,
            q1_q2 + q3_q0,
            1.0 - sq_q1 - sq_q3,
            q2_q3 - q1_q0,
            q1_q3 - q2_q0,
            q2_q3 + q1_q0,
            1.0 - sq_q1 - sq_q2,
        )
    }
}

impl Default for RotationVector {
    /// Identity attitude, device lying flat
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl From<UnitQuaternion<f64>> for RotationVector {
    fn from(q: UnitQuaternion<f64>) -> Self {
        Self::new(q.i, q.j, q.k, q.w)
    }
}

impl TryFrom<&[f64]> for RotationVector {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}
