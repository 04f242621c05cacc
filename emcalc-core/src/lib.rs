//! Emcalc Core - Fundamental types
//!
//! This crate provides the core types used throughout emcalc:
//! - `Unit`: the closed set of supported units of measurement
//! - `UnitMetadata`: display and classification data per unit
//! - `ConvertError`: typed conversion failures

mod error;
mod metadata;
mod unit;

pub use error::ConvertError;
pub use metadata::{describe_unit, UnitMetadata, UNIT_TABLE};
pub use unit::{DbScale, FieldClass, Unit};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{describe_unit, ConvertError, DbScale, FieldClass, Unit, UnitMetadata};
}
