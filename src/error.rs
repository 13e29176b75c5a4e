//! Error type for parsing platform sensor payloads

use thiserror::Error;

/// Errors raised while decoding platform codes and raw sensor payloads.
///
/// The numeric conversions themselves never fail; only the lookups that
/// translate loosely typed platform values into crate types do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// The integer code does not name any supported sensor stream
    #[error("unknown sensor type code {0}")]
    UnknownSensorType(i32),
    /// A rotation vector payload had fewer than three components
    #[error("rotation vector needs at least 3 components, got {len}")]
    TooFewComponents { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::UnknownSensorType(7), Error::UnknownSensorType(7));
        assert_ne!(
            Error::UnknownSensorType(7),
            Error::TooFewComponents { len: 7 }
        );
    }
}
