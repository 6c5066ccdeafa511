//! Small string helpers.

use crate::locale::Locale;

/// `Evet` or `Hayır`.
pub fn yes_no(value: bool) -> &'static str {
    let locale = Locale::tr_tr();
    if value {
        locale.yes
    } else {
        locale.no
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `-`.
pub fn remove_invalid_chars(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
