//! The conversion registry
//!
//! An ordered, read-only table binding (source, destination) unit pairs to
//! formula procedures. The table is compiled into the process; there is no
//! insertion or removal API. Lookups scan top to bottom and the first match
//! wins, so the registry rejects duplicate pairs when it is first built
//! rather than letting an earlier row silently shadow a later one.

use crate::formulas;
use emcalc_core::Unit;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The superset of extra inputs a formula may need beyond the source value.
///
/// Each formula shape consumes only the subset it declares; the remaining
/// members are ignored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConvertParams {
    /// Reference impedance in ohms, for power/voltage relations
    pub impedance: f64,
    /// Additional decibel offset (path loss or gain) applied in transit
    pub offset_db: f64,
    /// Frequency in hertz, for the far-field wavelength relation
    pub frequency_hz: f64,
}

/// A conversion procedure, tagged by the extra inputs it consumes.
///
/// The shapes are exhaustive: an entry always carries exactly one bound
/// procedure, so "arity declared but procedure missing" cannot be
/// expressed, let alone reached.
#[derive(Debug, Clone, Copy)]
pub enum Formula {
    /// Source value only
    Direct(fn(f64) -> f64),
    /// Source value and reference impedance in ohms
    WithImpedance(fn(f64, f64) -> f64),
    /// Source value, decibel offset, and frequency in hertz
    OverPath(fn(f64, f64, f64) -> f64),
}

impl Formula {
    /// Declared arity of the bound procedure, counting source value and
    /// result plus any extra parameters.
    pub const fn arity(&self) -> u8 {
        match self {
            Formula::Direct(_) => 2,
            Formula::WithImpedance(_) => 3,
            Formula::OverPath(_) => 4,
        }
    }

    /// Invoke the bound procedure with the subset of `params` it declares.
    pub fn apply(&self, value: f64, params: ConvertParams) -> f64 {
        match self {
            Formula::Direct(f) => f(value),
            Formula::WithImpedance(f) => f(value, params.impedance),
            Formula::OverPath(f) => f(value, params.offset_db, params.frequency_hz),
        }
    }
}

/// One row of the conversion table
#[derive(Debug, Clone, Copy)]
pub struct ConversionEntry {
    /// Source unit
    pub from: Unit,
    /// Destination unit
    pub to: Unit,
    /// Bound conversion procedure
    pub formula: Formula,
}

/// Registry of all directly supported unit-pair conversions
pub struct ConversionTable {
    entries: &'static [ConversionEntry],
}

/// Global conversion registry, built once and never mutated. Concurrent
/// readers need no synchronization.
pub static REGISTRY: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::new);

impl ConversionTable {
    fn new() -> Self {
        let table = ConversionTable { entries: &ENTRIES };
        table.assert_no_duplicate_pairs();
        table
    }

    /// First entry matching the ordered pair, in table order
    pub fn find(&self, from: Unit, to: Unit) -> Option<&ConversionEntry> {
        self.entries.iter().find(|e| e.from == from && e.to == to)
    }

    /// All entries, in table order
    pub fn entries(&self) -> &[ConversionEntry] {
        self.entries
    }

    fn assert_no_duplicate_pairs(&self) {
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                assert!(
                    !(a.from == b.from && a.to == b.to),
                    "duplicate conversion entry {} -> {}",
                    a.from,
                    a.to
                );
            }
        }
    }
}

use Formula::{Direct, OverPath, WithImpedance};
use Unit::*;

static ENTRIES: [ConversionEntry; 40] = [
    ConversionEntry { from: Dbm, to: Watt, formula: Direct(formulas::dbm_to_watt) },
    ConversionEntry { from: Dbm, to: WattPerSqMeter, formula: OverPath(formulas::dbm_to_wm2) },
    ConversionEntry { from: Dbm, to: WattPerSqCentimeter, formula: OverPath(formulas::dbm_to_wcm2) },
    ConversionEntry { from: Dbm, to: AmperePerMeter, formula: OverPath(formulas::dbm_to_am) },
    ConversionEntry { from: Dbm, to: Dbvm, formula: OverPath(formulas::dbm_to_dbvm) },
    ConversionEntry { from: Dbm, to: Dbuvm, formula: OverPath(formulas::dbm_to_dbuvm) },
    ConversionEntry { from: Dbm, to: VoltPerMeter, formula: OverPath(formulas::dbm_to_vm) },
    ConversionEntry { from: Dbm, to: Volt, formula: WithImpedance(formulas::dbm_to_volt) },
    ConversionEntry { from: Dbm, to: Dbv, formula: WithImpedance(formulas::dbm_to_dbv) },
    ConversionEntry { from: Dbm, to: Dbuv, formula: WithImpedance(formulas::dbm_to_dbuv) },
    ConversionEntry { from: Watt, to: Dbm, formula: Direct(formulas::watt_to_dbm) },
    ConversionEntry { from: Volt, to: Dbm, formula: WithImpedance(formulas::volt_to_dbm) },
    ConversionEntry { from: Dbuv, to: Dbm, formula: WithImpedance(formulas::dbuv_to_dbm) },
    ConversionEntry { from: Dbv, to: Dbm, formula: WithImpedance(formulas::dbv_to_dbm) },
    ConversionEntry { from: WattPerSqMeter, to: Dbm, formula: OverPath(formulas::wm2_to_dbm) },
    ConversionEntry { from: WattPerSqCentimeter, to: Dbm, formula: OverPath(formulas::wcm2_to_dbm) },
    ConversionEntry { from: Dbuvm, to: Dbm, formula: OverPath(formulas::dbuvm_to_dbm) },
    ConversionEntry { from: Dbvm, to: Dbm, formula: OverPath(formulas::dbvm_to_dbm) },
    ConversionEntry { from: VoltPerMeter, to: Dbm, formula: OverPath(formulas::vm_to_dbm) },
    ConversionEntry { from: VoltPerMeter, to: Dbvm, formula: Direct(formulas::amplitude_db) },
    ConversionEntry { from: VoltPerMeter, to: Watt, formula: OverPath(formulas::vm_to_watt) },
    ConversionEntry { from: VoltPerMeter, to: Dbuvm, formula: Direct(formulas::vm_to_dbuvm) },
    ConversionEntry { from: VoltPerMeter, to: AmperePerMeter, formula: Direct(formulas::vm_to_am) },
    ConversionEntry { from: VoltPerMeter, to: WattPerSqMeter, formula: Direct(formulas::vm_to_wm2) },
    ConversionEntry { from: VoltPerMeter, to: WattPerSqCentimeter, formula: Direct(formulas::vm_to_wcm2) },
    ConversionEntry { from: Watt, to: AmperePerMeter, formula: Direct(formulas::watt_to_am) },
    ConversionEntry { from: Watt, to: VoltPerMeter, formula: Direct(formulas::watt_to_vm) },
    ConversionEntry { from: Watt, to: WattPerSqMeter, formula: Direct(formulas::watt_to_wm2) },
    ConversionEntry { from: Watt, to: WattPerSqCentimeter, formula: Direct(formulas::watt_to_wcm2) },
    ConversionEntry { from: WattPerSqMeter, to: VoltPerMeter, formula: Direct(formulas::wm2_to_vm) },
    ConversionEntry { from: WattPerSqMeter, to: AmperePerMeter, formula: Direct(formulas::wm2_to_am) },
    ConversionEntry { from: Volt, to: Dbv, formula: Direct(formulas::amplitude_db) },
    ConversionEntry { from: Dbv, to: Volt, formula: Direct(formulas::amplitude_from_db) },
    ConversionEntry { from: Dbvm, to: VoltPerMeter, formula: Direct(formulas::amplitude_from_db) },
    ConversionEntry { from: Dbt, to: Tesla, formula: Direct(formulas::amplitude_from_db) },
    ConversionEntry { from: Tesla, to: AmperePerMeter, formula: Direct(formulas::tesla_to_am) },
    ConversionEntry { from: Tesla, to: Gauss, formula: Direct(formulas::tesla_to_gauss) },
    ConversionEntry { from: Gauss, to: Tesla, formula: Direct(formulas::gauss_to_tesla) },
    ConversionEntry { from: Tesla, to: Dbt, formula: Direct(formulas::amplitude_db) },
    ConversionEntry { from: Tesla, to: Dbut, formula: Direct(formulas::tesla_to_dbut) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_pairs() {
        // also exercised on first touch of REGISTRY, but keep the scan
        // explicit so a table edit fails a test before it fails at runtime
        let entries = REGISTRY.entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert!(
                    !(a.from == b.from && a.to == b.to),
                    "duplicate pair {:?} -> {:?}",
                    a.from,
                    a.to
                );
            }
        }
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(REGISTRY.entries().len(), 40);
    }

    #[test]
    fn test_no_identity_entries() {
        for entry in REGISTRY.entries() {
            assert_ne!(entry.from, entry.to);
        }
    }

    #[test]
    fn test_find_respects_table_order() {
        // first row of the table is Dbm -> Watt
        let entry = REGISTRY.find(Unit::Dbm, Unit::Watt).unwrap();
        assert_eq!(entry.formula.arity(), 2);
    }

    #[test]
    fn test_arity_per_family() {
        assert_eq!(REGISTRY.find(Dbm, Volt).unwrap().formula.arity(), 3);
        assert_eq!(REGISTRY.find(Dbm, VoltPerMeter).unwrap().formula.arity(), 4);
        assert_eq!(REGISTRY.find(Tesla, Gauss).unwrap().formula.arity(), 2);
    }

    #[test]
    fn test_absent_pairs() {
        assert!(REGISTRY.find(Tesla, Volt).is_none());
        assert!(REGISTRY.find(Gauss, Dbm).is_none());
        // direction matters: Tesla -> dBuT is tabulated, its reverse is not
        assert!(REGISTRY.find(Tesla, Dbut).is_some());
        assert!(REGISTRY.find(Dbut, Tesla).is_none());
        // Ampere has no direct pair at all
        assert!(REGISTRY.find(Ampere, Dbm).is_none());
    }

    #[test]
    fn test_dbm_fan_out() {
        for to in [Watt, WattPerSqMeter, WattPerSqCentimeter, AmperePerMeter, Dbvm, Dbuvm, VoltPerMeter, Volt, Dbv, Dbuv] {
            assert!(REGISTRY.find(Dbm, to).is_some(), "missing Dbm -> {:?}", to);
        }
    }

    #[test]
    fn test_apply_uses_declared_subset() {
        // a Direct formula ignores every extra parameter
        let entry = REGISTRY.find(Tesla, Gauss).unwrap();
        let params = ConvertParams { impedance: 50.0, offset_db: 99.0, frequency_hz: 1.0e9 };
        assert_eq!(entry.formula.apply(1.0, params), 10_000.0);
    }
}
