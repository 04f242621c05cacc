//! Emcalc SI - magnitude-prefix selection
//!
//! Picks the SI prefix (kilo, milli, micro, ...) under which a raw numeric
//! value displays at a chosen resolution. Free-standing: nothing here
//! depends on the conversion engine.

mod prefix;

pub use prefix::{find_scale, find_unscaled, SiPrefix, SI_PREFIXES};
