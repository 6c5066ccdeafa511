//! Tests for the top-level `format` and `format_with` entry points.

use trfmt::{format, format_with, parse, FormatOptions};

#[test]
fn test_format_numbers() {
    assert_eq!(format(1234.5, "number"), "1,235");
    assert_eq!(format(1234.5, "number:=0,0.0"), "1,234.5");
    assert_eq!(format("1234.5", "currency"), "1,234.50");
    assert_eq!(format(-1234.5, "currency:=(0,0.00)"), "(1,234.50)");
}

#[test]
fn test_format_accepts_options() {
    assert_eq!(format(Some(12), "number|adet"), "12 adet");
    assert_eq!(format(None::<f64>, "number|adet"), "");
}

#[test]
fn test_format_with_uncached() {
    let opts = FormatOptions {
        use_cache: false,
        ..FormatOptions::default()
    };
    assert_eq!(format_with(0.5, "percentage", &opts), "0.50%");
    assert_eq!(format_with("ılık", "text:=uppercase", &opts), "ILIK");
}

#[test]
fn test_parse_then_format() {
    let directive = parse("tr-currency:=0,0.00@left|₺");
    let value = "1234,5".into();
    assert_eq!(
        directive.format(&value, &FormatOptions::default()),
        "₺ 1.234,50"
    );
}
