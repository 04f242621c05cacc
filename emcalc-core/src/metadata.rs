//! Static display and classification metadata for each unit
//!
//! The table is purely descriptive: the conversion engine consumes only the
//! `Unit` identifiers, while UIs read suffix, symbol, and precision from
//! here.

use crate::unit::{DbScale, FieldClass, Unit};
use serde::Serialize;

/// Display and classification properties of a unit of measurement
#[derive(Debug, Clone, Serialize)]
pub struct UnitMetadata {
    /// The unit this entry describes
    pub unit: Unit,
    /// Field quantity (or quantities) the unit belongs to
    pub class: FieldClass,
    /// Decibel scale of the displayed value
    pub scale: DbScale,
    /// Decimal places a UI should render for this unit
    pub precision: u8,
    /// Short label appended to values
    pub suffix: &'static str,
    /// Formula symbol of the quantity, where one is conventional
    pub symbol: &'static str,
}

/// Properties for all supported units of measurement
pub static UNIT_TABLE: [UnitMetadata; 16] = [
    UnitMetadata {
        unit: Unit::Dbm,
        class: FieldClass::ALL,
        scale: DbScale::Db10,
        precision: 2,
        suffix: "dBm",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Dbv,
        class: FieldClass::ELECTRIC,
        scale: DbScale::Db20,
        precision: 2,
        suffix: "dBV",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Dbuv,
        class: FieldClass::ELECTRIC,
        scale: DbScale::Db20,
        precision: 2,
        suffix: "dBµV",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Dbvm,
        class: FieldClass::ELECTRIC,
        scale: DbScale::Db20,
        precision: 2,
        suffix: "dBVm",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Dbuvm,
        class: FieldClass::ELECTRIC,
        scale: DbScale::Db20,
        precision: 2,
        suffix: "dBµVm",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Dbt,
        class: FieldClass::FLUX.with(FieldClass::MAGNETIC),
        scale: DbScale::Db20,
        precision: 2,
        suffix: "dBT",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Dbut,
        class: FieldClass::FLUX.with(FieldClass::MAGNETIC),
        scale: DbScale::Db20,
        precision: 2,
        suffix: "dBµT",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::Watt,
        class: FieldClass::POWER,
        scale: DbScale::Linear,
        precision: 16,
        suffix: "W",
        symbol: "P",
    },
    UnitMetadata {
        unit: Unit::Volt,
        class: FieldClass::ELECTRIC,
        scale: DbScale::Linear,
        precision: 16,
        suffix: "V",
        symbol: "U",
    },
    UnitMetadata {
        unit: Unit::Ampere,
        class: FieldClass::POWER,
        scale: DbScale::Linear,
        precision: 16,
        suffix: "A",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::AmperePerMeter,
        class: FieldClass::POWER.with(FieldClass::FLUX),
        scale: DbScale::Linear,
        precision: 16,
        suffix: "A/m",
        symbol: "",
    },
    UnitMetadata {
        unit: Unit::VoltPerMeter,
        class: FieldClass::ELECTRIC,
        scale: DbScale::Linear,
        precision: 16,
        suffix: "V/m",
        symbol: "E",
    },
    UnitMetadata {
        unit: Unit::WattPerSqMeter,
        class: FieldClass::POWER,
        scale: DbScale::Linear,
        precision: 16,
        suffix: "W/m²",
        symbol: "H",
    },
    UnitMetadata {
        unit: Unit::WattPerSqCentimeter,
        class: FieldClass::POWER,
        scale: DbScale::Linear,
        precision: 16,
        suffix: "W/cm²",
        symbol: "H",
    },
    UnitMetadata {
        unit: Unit::Tesla,
        class: FieldClass::FLUX.with(FieldClass::MAGNETIC),
        scale: DbScale::Linear,
        precision: 16,
        suffix: "T",
        symbol: "B",
    },
    UnitMetadata {
        unit: Unit::Gauss,
        class: FieldClass::FLUX.with(FieldClass::MAGNETIC),
        scale: DbScale::Linear,
        precision: 16,
        suffix: "G",
        symbol: "B",
    },
];

/// Look up the metadata entry for a unit.
///
/// First match in table order; with the closed unit set every unit has
/// exactly one entry.
pub fn describe_unit(unit: Unit) -> Option<&'static UnitMetadata> {
    UNIT_TABLE.iter().find(|meta| meta.unit == unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_described() {
        for unit in Unit::ALL {
            let meta = describe_unit(unit).unwrap();
            assert_eq!(meta.unit, unit);
            assert!(!meta.suffix.is_empty());
        }
    }

    #[test]
    fn test_table_order_matches_unit_order() {
        let table_order: Vec<Unit> = UNIT_TABLE.iter().map(|m| m.unit).collect();
        assert_eq!(table_order, Unit::ALL.to_vec());
    }

    #[test]
    fn test_decibel_units_have_db_scale() {
        for meta in &UNIT_TABLE {
            let is_db = meta.suffix.starts_with("dB");
            assert_eq!(is_db, meta.scale != DbScale::Linear, "{}", meta.suffix);
        }
    }

    #[test]
    fn test_dbm_relates_to_all_quantities() {
        let meta = describe_unit(Unit::Dbm).unwrap();
        assert_eq!(meta.class, FieldClass::ALL);
        assert_eq!(meta.scale, DbScale::Db10);
    }
}
