//! Formatting options and configuration.

/// Options for formatting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Zone used when a `date` directive receives an epoch timestamp.
    #[cfg(feature = "chrono")]
    pub utc_offset: chrono::FixedOffset,
    /// Memoize parsed directive strings in the process-wide cache.
    pub use_cache: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            #[cfg(feature = "chrono")]
            utc_offset: chrono::Offset::fix(&chrono::Utc),
            use_cache: true,
        }
    }
}

impl FormatOptions {
    /// Options rendering timestamps at a fixed offset east of UTC.
    ///
    /// Returns `None` if the offset is a day or more.
    #[cfg(feature = "chrono")]
    pub fn with_utc_offset_seconds(self, seconds: i32) -> Option<Self> {
        let utc_offset = chrono::FixedOffset::east_opt(seconds)?;
        Some(Self { utc_offset, ..self })
    }
}
