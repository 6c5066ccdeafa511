//! Duration formatting (seconds to video, countdown and sentence styles)

use crate::directive::DurationStyle;
use crate::locale::{Locale, UnitWords};

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Day/hour/minute/second decomposition of a duration.
///
/// Days are 24 hours; there are no months or years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    pub day: u64,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
}

impl TimeComponents {
    pub fn from_seconds(seconds: u64) -> Self {
        TimeComponents {
            day: seconds / SECONDS_PER_DAY,
            hour: (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minute: (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            second: seconds % SECONDS_PER_MINUTE,
        }
    }

    /// Non-zero components paired with their unit words, largest first.
    fn non_zero(&self, words: &UnitWords) -> Vec<(u64, &'static str)> {
        [
            (self.day, words.day),
            (self.hour, words.hour),
            (self.minute, words.minute),
            (self.second, words.second),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .collect()
    }
}

/// Format a duration given in whole seconds, with Turkish unit words.
pub fn format_duration(seconds: u64, style: DurationStyle) -> String {
    format_duration_in(seconds, style, &Locale::tr_tr())
}

/// Format a duration given in whole seconds, with the locale's unit words.
pub fn format_duration_in(seconds: u64, style: DurationStyle, locale: &Locale) -> String {
    let t = TimeComponents::from_seconds(seconds);
    let units = &locale.duration_units;
    let long = &units.long;

    match style {
        DurationStyle::Video => {
            if t.hour > 0 {
                format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)
            } else {
                format!("{:02}:{:02}", t.minute, t.second)
            }
        }
        DurationStyle::Short => {
            let parts: Vec<String> = t
                .non_zero(&units.short)
                .into_iter()
                .map(|(n, unit)| format!("{n}{unit}"))
                .collect();
            if parts.is_empty() {
                format!("0{}", units.short.second)
            } else {
                parts.join(" ")
            }
        }
        DurationStyle::Long => {
            let parts: Vec<String> = t
                .non_zero(long)
                .into_iter()
                .map(|(n, unit)| format!("{n} {unit}"))
                .collect();
            if parts.is_empty() {
                format!("0 {}", long.second)
            } else {
                parts.join(" ")
            }
        }
        DurationStyle::Countdown => {
            let mut parts = Vec::with_capacity(4);
            if t.day > 0 {
                parts.push(format!("{}{}", t.day, units.countdown_day));
            }
            if t.hour > 0 {
                parts.push(format!("{}{}", t.hour, units.countdown_hour));
            }
            parts.push(format!("{:02}", t.minute));
            parts.push(format!("{:02}", t.second));
            parts.join(":")
        }
        DurationStyle::Process => {
            if seconds < SECONDS_PER_MINUTE {
                format!("{seconds} {}", long.second)
            } else if seconds < SECONDS_PER_HOUR {
                format!("{} {} {} {}", t.minute, long.minute, t.second, long.second)
            } else {
                format!("{} {} {} {}", t.hour, long.hour, t.minute, long.minute)
            }
        }
        DurationStyle::Elapsed => {
            if seconds < SECONDS_PER_MINUTE {
                units.just_now.to_string()
            } else if seconds < SECONDS_PER_HOUR {
                format!("{} {}", t.minute, long.minute)
            } else if seconds < SECONDS_PER_DAY {
                format!("{} {}", t.hour, long.hour)
            } else {
                format!("{} {}", t.day, long.day)
            }
        }
        DurationStyle::Progress => {
            if seconds < SECONDS_PER_MINUTE {
                format!("{seconds} {}", long.second)
            } else if seconds < SECONDS_PER_HOUR {
                format!("{}:{:02}", t.minute, t.second)
            } else {
                format!("{}:{:02}", t.hour, t.minute)
            }
        }
        DurationStyle::Plain => format!("{seconds} {}", long.second),
    }
}
