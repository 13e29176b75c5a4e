//! Sensor stream identifiers shared with the platform bridge
//!
//! Each stream is published on its own event channel and addressed by the
//! platform sensor type code in method-channel calls.
//!
//! # Example
//! ```
//! use absolute_sensor::{ReferenceFrame, SensorType};
//!
//! let sensor = SensorType::try_from(11).unwrap();
//! assert_eq!(sensor, SensorType::AbsoluteOrientation);
//! assert_eq!(sensor.channel(), "absolute_sensor/absolute_orientation");
//! assert_eq!(sensor.reference_frame(), Some(ReferenceFrame::MagneticNorthZVertical));
//! ```

use crate::error::Error;
use crate::types::ReferenceFrame;

/// Method channel carrying availability and update interval calls
pub const METHOD_CHANNEL: &str = "absolute_sensor/method";

/// Event channel carrying screen rotation angles
pub const SCREEN_ORIENTATION_CHANNEL: &str = "absolute_sensor/screen_orientation";

/// Motion sensor streams exposed by the bridge
///
/// Discriminants are the platform sensor type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(i32)]
pub enum SensorType {
    /// Raw acceleration including gravity
    Accelerometer = 1,
    /// Magnetic field strength
    Magnetometer = 2,
    /// Angular rate
    Gyroscope = 4,
    /// Linear acceleration with gravity removed
    UserAcceleration = 10,
    /// Attitude referenced to magnetic north
    AbsoluteOrientation = 11,
    /// Attitude with an arbitrary initial heading
    Orientation = 15,
}

impl SensorType {
    /// Every stream, in channel registration order
    pub const ALL: [SensorType; 6] = [
        SensorType::Accelerometer,
        SensorType::UserAcceleration,
        SensorType::Gyroscope,
        SensorType::Magnetometer,
        SensorType::Orientation,
        SensorType::AbsoluteOrientation,
    ];

    /// Platform sensor type code
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Event channel name the stream is published on
    pub const fn channel(self) -> &'static str {
        match self {
            SensorType::Accelerometer => "absolute_sensor/accelerometer",
            SensorType::UserAcceleration => "absolute_sensor/user_accelerometer",
            SensorType::Gyroscope => "absolute_sensor/gyroscope",
            SensorType::Magnetometer => "absolute_sensor/magnetometer",
            SensorType::Orientation => "absolute_sensor/orientation",
            SensorType::AbsoluteOrientation => "absolute_sensor/absolute_orientation",
        }
    }

    /// Look up a stream by its event channel name
    pub fn from_channel(channel: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sensor| sensor.channel() == channel)
    }

    /// Reference frame of an orientation stream, `None` for raw vectors
    pub const fn reference_frame(self) -> Option<ReferenceFrame> {
        match self {
            SensorType::Orientation => Some(ReferenceFrame::ArbitraryZVertical),
            SensorType::AbsoluteOrientation => Some(ReferenceFrame::MagneticNorthZVertical),
            SensorType::Accelerometer
            | SensorType::UserAcceleration
            | SensorType::Gyroscope
            | SensorType::Magnetometer => None,
        }
    }

    /// Whether samples are `{roll, pitch, yaw}` rather than `{x, y, z}`
    pub const fn is_orientation(self) -> bool {
        self.reference_frame().is_some()
    }
}

impl TryFrom<i32> for SensorType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(SensorType::Accelerometer),
            2 => Ok(SensorType::Magnetometer),
            4 => Ok(SensorType::Gyroscope),
            10 => Ok(SensorType::UserAcceleration),
            11 => Ok(SensorType::AbsoluteOrientation),
            15 => Ok(SensorType::Orientation),
            other => Err(Error::UnknownSensorType(other)),
        }
    }
}

impl From<SensorType> for i32 {
    fn from(sensor: SensorType) -> Self {
        sensor.code()
    }
}
