//! Dispatch from a (value, unit pair, parameters) request to a formula
//!
//! All entry points funnel through [`convert`]; the fixed-arity adapters
//! only default the parameters their conversion family does not need, so
//! behavior can never diverge between them.

use crate::registry::{ConvertParams, REGISTRY};
use emcalc_core::{ConvertError, Unit};

/// Convert `value` from `from` to `to`.
///
/// `impedance` (ohms) feeds the power/voltage relations, `offset_db` and
/// `frequency_hz` the far-field relations; conversions outside those
/// families ignore them. Converting a unit to itself returns the value
/// unchanged without consulting the registry.
///
/// Fails with [`ConvertError::UnknownConversion`] when the pair has no
/// registry entry. A failed conversion is also reported as a `tracing`
/// debug event; acting on it is the caller's decision.
pub fn convert(
    value: f64,
    from: Unit,
    to: Unit,
    impedance: f64,
    offset_db: f64,
    frequency_hz: f64,
) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(value);
    }

    let params = ConvertParams { impedance, offset_db, frequency_hz };
    match REGISTRY.find(from, to) {
        Some(entry) => Ok(entry.formula.apply(value, params)),
        None => {
            tracing::debug!(%from, %to, "conversion failed: pair not in registry");
            Err(ConvertError::UnknownConversion { from, to })
        }
    }
}

/// Convert between power and voltage quantities at a reference impedance.
pub fn convert_conducted(
    value: f64,
    from: Unit,
    to: Unit,
    impedance: f64,
) -> Result<f64, ConvertError> {
    convert(value, from, to, impedance, 0.0, 0.0)
}

/// Convert through the free-space path: `offset_db` of loss or gain picked
/// up in transit, and the far-field wavelength at `frequency_hz`.
pub fn convert_radiated(
    value: f64,
    from: Unit,
    to: Unit,
    offset_db: f64,
    frequency_hz: f64,
) -> Result<f64, ConvertError> {
    convert(value, from, to, 0.0, offset_db, frequency_hz)
}

/// Convert a pair that needs no extra parameters.
pub fn convert_direct(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    convert(value, from, to, 0.0, 0.0, 0.0)
}
