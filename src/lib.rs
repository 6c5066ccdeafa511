//! trfmt - compact format directives for Turkish-locale display strings
//!
//! A directive string `type:=format@position|unit` selects a formatting
//! strategy (date, number, currency, tr-currency, percentage, duration, text)
//! and an optional unit. Formatting never fails: when a strategy cannot handle
//! the value, the plain string form of the value is returned.
//!
//! ```
//! assert_eq!(trfmt::format(1234.5, "currency"), "1,234.50");
//! assert_eq!(trfmt::format(1234.5, "tr-currency@left|₺"), "₺ 1.234,50");
//! assert_eq!(trfmt::format(3661, "duration:=video"), "01:01:01");
//! assert_eq!(trfmt::format("istanbul", "text:=capitalize"), "İstanbul");
//! ```

pub mod ast;
pub mod directive;
pub mod error;
pub mod options;
pub mod value;

mod cache;
mod formatter;
mod locale;
pub mod parser;

#[cfg(feature = "chrono")]
pub mod dates;
pub mod dicts;
pub mod nums;
pub mod randoms;
pub mod strings;

pub use ast::{DatePattern, NumberPattern};
pub use directive::{DurationStyle, FormatDirective, FormatKind, TextStyle, UnitPosition};
pub use error::{FormatError, ParseError};
pub use formatter::{
    add_unit, format_duration, format_duration_in, format_number, format_text, format_text_in,
    TimeComponents,
};
pub use locale::{Casing, DurationUnits, Locale, UnitWords};
pub use options::FormatOptions;
pub use parser::parse;
pub use value::Value;

/// Format a value with a directive string, using default options.
pub fn format<'a>(value: impl Into<Value<'a>>, format_string: &str) -> String {
    format_with(value, format_string, &FormatOptions::default())
}

/// Format a value with a directive string.
pub fn format_with<'a>(
    value: impl Into<Value<'a>>,
    format_string: &str,
    opts: &FormatOptions,
) -> String {
    let directive = if opts.use_cache {
        cache::get_or_parse(format_string)
    } else {
        parser::parse(format_string)
    };
    directive.format(&value.into(), opts)
}
