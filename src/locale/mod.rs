//! Locale data and locale-sensitive case mapping.

mod builtin;
mod casing;

pub use builtin::{DurationUnits, Locale, UnitWords};
pub use casing::Casing;
