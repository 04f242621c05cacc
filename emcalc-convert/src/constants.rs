//! Physical constants for the free-space field relations
//!
//! Values are fixed by contract: conversions must stay bit-for-bit
//! reproducible across releases, so these are not configurable.

use std::f64::consts::PI;

/// Propagation speed of an electromagnetic wave in vacuum, m/s
/// (engineering value, used to derive wavelength from frequency).
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Free-space wave impedance Z0, in ohms. Relates electric field strength
/// to power density in vacuum.
pub const FREE_SPACE_IMPEDANCE: f64 = 376.7304;

/// Magnetic constant u0 (permeability of free space), 4 pi x 10^-7.
pub const MAGNETIC_CONSTANT: f64 = 4.0e-7 * PI;

/// Solid-angle factor 4 pi in the far-field power density relation.
pub(crate) const FOUR_PI: f64 = 4.0 * PI;

/// Frequencies below this floor are clamped before deriving wavelength,
/// keeping the relation finite near DC. Hard contract, not an
/// approximation.
pub const FREQUENCY_FLOOR_HZ: f64 = 0.01;
