//! Built-in locale data.

use super::casing::Casing;

/// Words used for one duration style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitWords {
    pub day: &'static str,
    pub hour: &'static str,
    pub minute: &'static str,
    pub second: &'static str,
}

/// Duration unit vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationUnits {
    /// Words for the `long` style and the sentence-like styles
    pub long: UnitWords,
    /// Suffixes for the `short` style
    pub short: UnitWords,
    /// Day suffix in `countdown`
    pub countdown_day: &'static str,
    /// Hour suffix in `countdown`
    pub countdown_hour: &'static str,
    /// Phrase for durations under a minute in `elapsed`
    pub just_now: &'static str,
}

/// Locale settings for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub date_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
    pub duration_units: DurationUnits,
    /// Words kept lowercase by title casing unless they open the text
    pub title_stop_words: &'static [&'static str],
    pub yes: &'static str,
    pub no: &'static str,
    pub casing: Casing,
}

impl Default for Locale {
    fn default() -> Self {
        Self::tr_tr()
    }
}

impl Locale {
    /// US English locale. Numeric patterns are written against its separators.
    pub fn en_us() -> Self {
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            date_separator: '/',
            am_string: "AM",
            pm_string: "PM",
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            duration_units: DurationUnits {
                long: UnitWords {
                    day: "day",
                    hour: "hour",
                    minute: "minute",
                    second: "second",
                },
                short: UnitWords {
                    day: "d",
                    hour: "h",
                    minute: "m",
                    second: "s",
                },
                countdown_day: "d",
                countdown_hour: "h",
                just_now: "just now",
            },
            title_stop_words: &["and", "or", "with", "of", "for"],
            yes: "Yes",
            no: "No",
            casing: Casing::Default,
        }
    }

    /// Turkish locale: period groups thousands, comma marks decimals.
    pub fn tr_tr() -> Self {
        Locale {
            decimal_separator: ',',
            thousands_separator: '.',
            date_separator: '.',
            am_string: "ÖÖ",
            pm_string: "ÖS",
            month_names_short: [
                "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
            ],
            month_names_full: [
                "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül",
                "Ekim", "Kasım", "Aralık",
            ],
            day_names_short: ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"],
            day_names_full: [
                "Pazar",
                "Pazartesi",
                "Salı",
                "Çarşamba",
                "Perşembe",
                "Cuma",
                "Cumartesi",
            ],
            duration_units: DurationUnits {
                long: UnitWords {
                    day: "gün",
                    hour: "saat",
                    minute: "dakika",
                    second: "saniye",
                },
                short: UnitWords {
                    day: "g",
                    hour: "sa",
                    minute: "dk",
                    second: "sn",
                },
                countdown_day: "g",
                countdown_hour: "s",
                just_now: "az önce",
            },
            title_stop_words: &["ve", "veya", "ile", "de", "da", "için"],
            yes: "Evet",
            no: "Hayır",
            casing: Casing::Turkic,
        }
    }

    /// Same locale with the grouping and decimal separators exchanged.
    pub fn with_swapped_separators(mut self) -> Self {
        std::mem::swap(&mut self.decimal_separator, &mut self.thousands_separator);
        self
    }
}
