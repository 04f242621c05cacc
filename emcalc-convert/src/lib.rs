//! Emcalc Convert - Electromagnetic field unit conversion
//!
//! Converts scalar readings between power, voltage, field-strength, and
//! flux-density units (dBm, Watt, Volt, V/m, A/m, Tesla, Gauss, and their
//! decibel/micro variants) through a fixed registry of pairwise formulas.
//!
//! - [`convert`] is the general entry point; [`convert_conducted`],
//!   [`convert_radiated`], and [`convert_direct`] default the parameters a
//!   conversion family does not need.
//! - [`formulas`] holds the pure physics relations, usable on their own.
//! - [`REGISTRY`] is the shared read-only conversion table.
//!
//! The registry covers direct pairs only: a conversion that is reachable
//! through an intermediate unit but not tabulated fails with
//! [`ConvertError::UnknownConversion`].

pub mod constants;
mod dispatch;
pub mod formulas;
mod registry;

pub use constants::{FREE_SPACE_IMPEDANCE, MAGNETIC_CONSTANT, SPEED_OF_LIGHT};
pub use dispatch::{convert, convert_conducted, convert_direct, convert_radiated};
pub use formulas::wavelength;
pub use registry::{ConversionEntry, ConversionTable, ConvertParams, Formula, REGISTRY};

pub use emcalc_core::{ConvertError, Unit};
