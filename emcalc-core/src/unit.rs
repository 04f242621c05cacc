//! Unit identifiers and their classification

use crate::metadata::{describe_unit, UnitMetadata};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The field quantity (or quantities) a unit belongs to, as a bitmask.
///
/// A unit can belong to more than one quantity at once: Tesla reads as both
/// a flux density and a magnetic field, and dBm relates to all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldClass(u8);

impl FieldClass {
    /// Unspecific field
    pub const NONE: FieldClass = FieldClass(0);

    /// Electric field (E)
    pub const ELECTRIC: FieldClass = FieldClass(1);

    /// Magnetic flux density (B)
    pub const FLUX: FieldClass = FieldClass(2);

    /// Magnetic field strength (H)
    pub const MAGNETIC: FieldClass = FieldClass(4);

    /// Power (P)
    pub const POWER: FieldClass = FieldClass(8);

    /// Any defined field quantity
    pub const ALL: FieldClass = FieldClass(1 | 2 | 4 | 8);

    /// Combine two classes into one
    pub const fn with(self, other: FieldClass) -> FieldClass {
        FieldClass(self.0 | other.0)
    }

    /// Check whether `other` is fully contained in this class
    pub const fn contains(self, other: FieldClass) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Which decibel transform, if any, a unit's displayed value has been
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbScale {
    /// Plain linear value
    Linear,
    /// Power decibel (10 log10)
    Db10,
    /// Voltage / field decibel (20 log10)
    Db20,
}

/// Supported units of measurement for E/H/B field and power readings.
///
/// The set is closed: conversions are defined pairwise in a fixed registry,
/// and there is no way to add units at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Power level in dB relative to 1 mW
    Dbm,
    /// Voltage level in dB relative to 1 V
    Dbv,
    /// Voltage level in dB relative to 1 uV
    Dbuv,
    /// Electric field strength in dB relative to 1 V/m
    Dbvm,
    /// Electric field strength in dB relative to 1 uV/m
    Dbuvm,
    /// Magnetic flux density in dB relative to 1 T
    Dbt,
    /// Magnetic flux density in dB relative to 1 uT
    Dbut,
    /// Power (P) in Watt
    Watt,
    /// Voltage (U) in Volt
    Volt,
    /// Current (I) in Ampere
    Ampere,
    /// Magnetic field strength (H) in Ampere per meter
    AmperePerMeter,
    /// Electric field strength (E) in Volt per meter
    VoltPerMeter,
    /// Power density in Watt per square meter
    WattPerSqMeter,
    /// Power density in Watt per square centimeter
    WattPerSqCentimeter,
    /// Magnetic flux density (B) in Tesla
    Tesla,
    /// Magnetic flux density (B) in Gauss
    Gauss,
}

impl Unit {
    /// All supported units, in metadata table order
    pub const ALL: [Unit; 16] = [
        Unit::Dbm,
        Unit::Dbv,
        Unit::Dbuv,
        Unit::Dbvm,
        Unit::Dbuvm,
        Unit::Dbt,
        Unit::Dbut,
        Unit::Watt,
        Unit::Volt,
        Unit::Ampere,
        Unit::AmperePerMeter,
        Unit::VoltPerMeter,
        Unit::WattPerSqMeter,
        Unit::WattPerSqCentimeter,
        Unit::Tesla,
        Unit::Gauss,
    ];

    /// Display and classification metadata for this unit
    pub fn metadata(self) -> Option<&'static UnitMetadata> {
        describe_unit(self)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match describe_unit(*self) {
            Some(meta) => write!(f, "{}", meta.suffix),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class_contains() {
        let both = FieldClass::FLUX.with(FieldClass::MAGNETIC);
        assert!(both.contains(FieldClass::FLUX));
        assert!(both.contains(FieldClass::MAGNETIC));
        assert!(!both.contains(FieldClass::ELECTRIC));
        assert!(FieldClass::ALL.contains(both));
    }

    #[test]
    fn test_field_class_none() {
        assert!(FieldClass::POWER.contains(FieldClass::NONE));
        assert!(!FieldClass::NONE.contains(FieldClass::POWER));
    }

    #[test]
    fn test_all_units_distinct() {
        for (i, a) in Unit::ALL.iter().enumerate() {
            for b in &Unit::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Unit::Dbm), "dBm");
        assert_eq!(format!("{}", Unit::VoltPerMeter), "V/m");
        assert_eq!(format!("{}", Unit::Gauss), "G");
    }

    #[test]
    fn test_serde_round_trip() {
        for unit in Unit::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            let back: Unit = serde_json::from_str(&json).unwrap();
            assert_eq!(unit, back);
        }
    }
}
