//! Locale-sensitive case mapping.
//!
//! Unicode's default mapping folds `i` to `I` and `I` to `i`. Turkish and
//! Azerbaijani keep dotted and dotless i apart:
//! - `i` ↔ `İ` (U+0130)
//! - `ı` (U+0131) ↔ `I`

/// Case mapping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Casing {
    /// Unicode default case mapping
    #[default]
    Default,
    /// Turkic dotted/dotless i mapping
    Turkic,
}

impl Casing {
    /// Uppercase a whole string.
    pub fn to_upper(self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            self.push_upper(&mut out, c);
        }
        out
    }

    /// Lowercase a whole string.
    ///
    /// Context-dependent mappings such as the Greek final sigma follow
    /// `str::to_lowercase`.
    pub fn to_lower(self, s: &str) -> String {
        match self {
            Casing::Default => s.to_lowercase(),
            // ı and i are already lowercase, so the second pass keeps them
            Casing::Turkic => s
                .chars()
                .map(|c| match c {
                    'I' => 'ı',
                    'İ' => 'i',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase(),
        }
    }

    /// Uppercase the first character and lowercase the rest.
    pub fn capitalize(self, s: &str) -> String {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        let mut out = String::with_capacity(s.len());
        self.push_upper(&mut out, first);
        out.push_str(&self.to_lower(chars.as_str()));
        out
    }

    fn push_upper(self, out: &mut String, c: char) {
        match (self, c) {
            (Casing::Turkic, 'i') => out.push('İ'),
            (Casing::Turkic, 'ı') => out.push('I'),
            _ => out.extend(c.to_uppercase()),
        }
    }
}
