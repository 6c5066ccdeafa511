//! Text casing

use crate::directive::TextStyle;
use crate::locale::Locale;

/// Apply a casing style with Turkish case mapping.
pub fn format_text(text: &str, style: TextStyle) -> String {
    format_text_in(text, style, &Locale::tr_tr())
}

/// Apply a casing style with the locale's case mapping and stop-words.
///
/// Words are separated by single spaces; runs of spaces produce empty words
/// and are preserved.
pub fn format_text_in(text: &str, style: TextStyle, locale: &Locale) -> String {
    let casing = locale.casing;

    match style {
        TextStyle::Uppercase => casing.to_upper(text),
        TextStyle::Lowercase => casing.to_lower(text),
        TextStyle::Capitalize => text
            .split(' ')
            .map(|word| casing.capitalize(word))
            .collect::<Vec<_>>()
            .join(" "),
        TextStyle::Sentence => casing.capitalize(text),
        TextStyle::Title => text
            .split(' ')
            .enumerate()
            .map(|(index, word)| {
                let lower = casing.to_lower(word);
                if index > 0 && locale.title_stop_words.contains(&lower.as_str()) {
                    lower
                } else {
                    casing.capitalize(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        TextStyle::AsIs => text.to_string(),
    }
}
