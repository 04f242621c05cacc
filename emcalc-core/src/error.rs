//! Typed conversion failures
//!
//! Failed conversions are recoverable values, never panics. Retrying is
//! pointless: the registry is immutable, so the same request fails the same
//! way every time.

use crate::unit::Unit;
use thiserror::Error;

/// Errors returned by the conversion engine.
///
/// Out-of-domain numeric inputs (logarithm of a non-positive value and the
/// like) are not errors; they propagate as IEEE NaN/infinity results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// No conversion is defined for the ordered unit pair.
    ///
    /// The registry holds direct pairs only; a pair reachable through an
    /// intermediate unit still fails.
    #[error("no conversion defined for {from} -> {to}")]
    UnknownConversion { from: Unit, to: Unit },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_units() {
        let err = ConvertError::UnknownConversion {
            from: Unit::Tesla,
            to: Unit::Volt,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("T"));
        assert!(msg.contains("V"));
    }
}
