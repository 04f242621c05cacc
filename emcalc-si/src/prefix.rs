//! The SI prefix table and the scale scan
//!
//! The table is ordered strictly descending by factor, from 10^24 down to
//! 10^-24. A handful of prefixes (hecto, deca, deci, centi) are shipped
//! disabled by display policy; the scan skips them instead of taking the
//! first numeric match.

use serde::Serialize;

/// An SI magnitude prefix
#[derive(Debug, Clone, Serialize)]
pub struct SiPrefix {
    /// Decimal multiplier of the prefix
    pub factor: f64,
    /// Short symbol used to prefix a unit label
    pub symbol: &'static str,
    /// Full prefix name
    pub name: &'static str,
    /// Disabled prefixes are skipped by the scale scan
    pub enabled: bool,
}

/// All SI prefixes, descending by factor
pub static SI_PREFIXES: [SiPrefix; 21] = [
    SiPrefix { factor: 1e24, symbol: "Y", name: "yotta", enabled: true },
    SiPrefix { factor: 1e21, symbol: "Z", name: "zetta", enabled: true },
    SiPrefix { factor: 1e18, symbol: "E", name: "exa", enabled: true },
    SiPrefix { factor: 1e15, symbol: "P", name: "peta", enabled: true },
    SiPrefix { factor: 1e12, symbol: "T", name: "tera", enabled: true },
    SiPrefix { factor: 1e9, symbol: "G", name: "giga", enabled: true },
    SiPrefix { factor: 1e6, symbol: "M", name: "mega", enabled: true },
    SiPrefix { factor: 1e3, symbol: "k", name: "kilo", enabled: true },
    SiPrefix { factor: 1e2, symbol: "h", name: "hecto", enabled: false },
    SiPrefix { factor: 1e1, symbol: "da", name: "deca", enabled: false },
    SiPrefix { factor: 1.0, symbol: "", name: "", enabled: true },
    SiPrefix { factor: 1e-1, symbol: "d", name: "deci", enabled: false },
    SiPrefix { factor: 1e-2, symbol: "c", name: "centi", enabled: false },
    SiPrefix { factor: 1e-3, symbol: "m", name: "milli", enabled: true },
    SiPrefix { factor: 1e-6, symbol: "µ", name: "micro", enabled: true },
    SiPrefix { factor: 1e-9, symbol: "n", name: "nano", enabled: true },
    SiPrefix { factor: 1e-12, symbol: "p", name: "pico", enabled: true },
    SiPrefix { factor: 1e-15, symbol: "f", name: "femto", enabled: true },
    SiPrefix { factor: 1e-18, symbol: "a", name: "atto", enabled: true },
    SiPrefix { factor: 1e-21, symbol: "z", name: "zepto", enabled: true },
    SiPrefix { factor: 1e-24, symbol: "y", name: "yocto", enabled: true },
];

/// Largest-magnitude enabled prefix under which `value` still displays at
/// or above `level`.
///
/// Scans the descending table and returns the first enabled entry with
/// `value / factor >= level`; `None` when not even the smallest prefix
/// satisfies the predicate.
pub fn find_scale(value: f64, level: f64) -> Option<&'static SiPrefix> {
    SI_PREFIXES
        .iter()
        .find(|prefix| prefix.enabled && value / prefix.factor >= level)
}

/// The 1:1 scaling entry (no prefix). By construction [`find_scale`] with
/// value 1.0 and level 1.0 lands on the factor-1.0 row.
pub fn find_unscaled() -> &'static SiPrefix {
    find_scale(1.0, 1.0).expect("prefix table holds the factor-1.0 entry")
}
