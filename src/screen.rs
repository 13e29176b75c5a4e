//! Screen orientation reporting
//!
//! The screen stream publishes the interface rotation in degrees, and only
//! when it changes. Android reports a surface rotation code; iOS reports the
//! interface orientation directly.

use log::{debug, warn};

/// Interface orientation of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ScreenOrientation {
    #[default]
    Portrait,
    /// Rotated 90° clockwise from portrait
    LandscapeRight,
    PortraitUpsideDown,
    /// Rotated 90° counter-clockwise from portrait
    LandscapeLeft,
}

impl ScreenOrientation {
    /// Rotation angle published on the screen channel
    pub const fn degrees(self) -> f64 {
        match self {
            ScreenOrientation::Portrait => 0.0,
            ScreenOrientation::LandscapeRight => 90.0,
            ScreenOrientation::PortraitUpsideDown => 180.0,
            ScreenOrientation::LandscapeLeft => -90.0,
        }
    }

    /// Map an Android `Surface.ROTATION_*` code
    ///
    /// # Example
    /// ```
    /// use absolute_sensor::ScreenOrientation;
    ///
    /// assert_eq!(ScreenOrientation::from_surface_rotation(3), Some(ScreenOrientation::LandscapeLeft));
    /// assert_eq!(ScreenOrientation::from_surface_rotation(4), None);
    /// ```
    pub const fn from_surface_rotation(code: i32) -> Option<Self> {
        match code {
            0 => Some(ScreenOrientation::Portrait),
            1 => Some(ScreenOrientation::LandscapeRight),
            2 => Some(ScreenOrientation::PortraitUpsideDown),
            3 => Some(ScreenOrientation::LandscapeLeft),
            _ => None,
        }
    }

    /// Map a `UIInterfaceOrientation` raw value
    ///
    /// `0` is `unknown` and maps to `None` like any other unlisted value.
    ///
    /// # Example
    /// ```
    /// use absolute_sensor::ScreenOrientation;
    ///
    /// let landscape = ScreenOrientation::from_interface_orientation(4);
    /// assert_eq!(landscape, Some(ScreenOrientation::LandscapeRight));
    /// assert_eq!(ScreenOrientation::from_interface_orientation(0), None);
    /// ```
    pub const fn from_interface_orientation(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(ScreenOrientation::Portrait),
            2 => Some(ScreenOrientation::PortraitUpsideDown),
            3 => Some(ScreenOrientation::LandscapeLeft),
            4 => Some(ScreenOrientation::LandscapeRight),
            _ => None,
        }
    }
}

/// Emits the screen rotation only when it differs from the last one sent
///
/// Unknown rotations are reported as portrait. Changes are detected on the
/// resolved orientation, so an unknown code following portrait is not
/// published again.
#[derive(Debug, Clone, Default)]
pub struct ScreenOrientationTracker {
    last: Option<ScreenOrientation>,
}

impl ScreenOrientationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current orientation, returning degrees to publish if it changed
    pub fn update(&mut self, orientation: Option<ScreenOrientation>) -> Option<f64> {
        let orientation = orientation.unwrap_or_else(|| {
            warn!("unrecognised screen rotation, reporting portrait");
            ScreenOrientation::Portrait
        });

        if self.last == Some(orientation) {
            return None;
        }

        debug!("screen orientation changed to {:?}", orientation);
        self.last = Some(orientation);
        Some(orientation.degrees())
    }

    /// Feed an Android surface rotation code
    pub fn update_surface_rotation(&mut self, code: i32) -> Option<f64> {
        self.update(ScreenOrientation::from_surface_rotation(code))
    }

    /// Feed an iOS `UIInterfaceOrientation` raw value
    pub fn update_interface_orientation(&mut self, raw: i32) -> Option<f64> {
        self.update(ScreenOrientation::from_interface_orientation(raw))
    }

    /// Last orientation published, if any
    pub fn last(&self) -> Option<ScreenOrientation> {
        self.last
    }

    /// Forget the last published orientation so the next update always emits
    pub fn reset(&mut self) {
        self.last = None;
    }
}
