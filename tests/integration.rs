//! Integration tests for trfmt - the dispatcher contract end to end.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use trfmt::{add_unit, format, format_with, FormatDirective, FormatOptions, UnitPosition, Value};

// ============================================================================
// Unit decoration
// ============================================================================

#[test]
fn test_add_unit_positions() {
    assert_eq!(add_unit("100", "kg", &UnitPosition::Left), "kg 100");
    assert_eq!(add_unit("100", "kg", &UnitPosition::Right), "100 kg");
    assert_eq!(add_unit("100", "", &UnitPosition::Right), "100");
    assert_eq!(add_unit("100", "", &UnitPosition::Left), "100");
}

#[test]
fn test_unit_applied_to_every_known_kind() {
    assert_eq!(format(1500, "number|adet"), "1,500 adet");
    assert_eq!(format(1500, "currency@left|$"), "$ 1,500.00");
    assert_eq!(format(1500, "tr-currency|TL"), "1.500,00 TL");
    assert_eq!(format(25, "percentage@left|oran"), "oran 25.00%");
    assert_eq!(format(90, "duration:=short|toplam"), "1dk 30sn toplam");
    assert_eq!(format("ok", "text:=uppercase@left|>"), "> OK");
}

#[test]
fn test_repeated_separators_end_their_field() {
    assert_eq!(format(1500, "number@left@up|kg|m"), "kg 1,500");
    assert_eq!(format(1234.5, "currency:=0,0.0:=x"), "1,234.5");
}

#[test]
fn test_unrecognized_position_decorates_right() {
    assert_eq!(format(5, "number@center|kg"), "5 kg");
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_unknown_kind_returns_plain_value_without_unit() {
    assert_eq!(format(1234.5, "money:=0,0|TL"), "1234.5");
    assert_eq!(format("merhaba", "unknown@left|x"), "merhaba");
    assert_eq!(format(7, ""), "7");
}

#[test]
fn test_strategy_failures_never_escape() {
    assert_eq!(format(f64::NAN, "number"), "NaN");
    assert_eq!(format(f64::INFINITY, "currency"), "Infinity");
    assert_eq!(format("abc", "percentage|%"), "abc");
    assert_eq!(format(Value::Empty, "number"), "");
    assert_eq!(format(true, "number"), "1");
}

#[test]
fn test_invalid_pattern_falls_back() {
    assert_eq!(format(1234.5, "currency:=(0,0.00"), "1234.5");
}

// ============================================================================
// Options and reuse
// ============================================================================

#[test]
fn test_cache_does_not_change_results() {
    let cached = FormatOptions::default();
    let uncached = FormatOptions {
        use_cache: false,
        ..FormatOptions::default()
    };
    for fs in ["number", "tr-currency@left|₺", "duration:=countdown", "text:=title"] {
        for value in [Value::Number(93_909.0), Value::Text("ve istanbul")] {
            assert_eq!(
                format_with(value.clone(), fs, &cached),
                format_with(value, fs, &uncached)
            );
        }
    }
}

#[test]
fn test_directive_reuse_is_idempotent() {
    let directive = FormatDirective::parse("currency@left|€");
    let opts = FormatOptions::default();
    let value = Value::Number(99.999);
    let first = directive.format(&value, &opts);
    assert_eq!(first, "€ 100.00");
    assert_eq!(directive.format(&value, &opts), first);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let fs = format!("number:=0,0|x{i}");
                format(1_000_000 + i, &fs)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("1,000,00{i} x{i}"));
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_fallback_is_logged() {
    let logs = capture_logs(|| {
        assert_eq!(format("x", "number|kg"), "x");
    });
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("format failed, falling back to plain value"), "{logs}");
    assert!(logs.contains("value_type=\"text\""), "{logs}");
}

#[test]
fn test_unknown_kind_is_logged_at_debug() {
    let logs = capture_logs(|| {
        assert_eq!(format(3, "money|TL"), "3");
    });
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("unrecognized format type, using plain value"), "{logs}");
    assert!(!logs.contains("WARN"), "{logs}");
}
