//! Tests for the line tokenizer.
//!
//! Covers: end-to-end extraction for the built-in presets, tolerant vs
//! strict handling of malformed lines, colon-split extraction, record
//! semantics (original line, collisions, idempotence), and permissive
//! degradation on truncated input.

mod common;

use common::CLF_LINE;

use accesslog_toolchain_core::error::ParseError;
use accesslog_toolchain_core::{AccessLogParser, LogFormatPreset, ORIGINAL_LINE_KEY};

const COMBINED_LINE: &str = "192.168.1.20 - alice [29/Aug/2026:08:15:02 +0000] \
\"POST /api/v1/data HTTP/1.1\" 201 512 \"https://example.com/start\" \"curl/8.5.0\"";

// ─── 1. End-to-end extraction ───────────────────────────────────────────────

#[test]
fn clf_example_line() {
    let parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    let record = parser.parse_line(CLF_LINE).unwrap();

    assert_eq!(record.get("remoteHost"), Some("127.0.0.1"));
    assert_eq!(record.get("logname"), Some("-"));
    assert_eq!(record.get("remoteUser"), Some("frank"));
    assert_eq!(record.get("time"), Some("10/Oct/2000:13:55:36 -0700"));
    assert_eq!(record.get("request"), Some("GET /apache_pb.gif HTTP/1.0"));
    assert_eq!(record.get("status"), Some("200"));
    assert_eq!(record.get("sizeCLF"), Some("2326"));
}

#[test]
fn combined_line_extracts_headers() {
    let parser = AccessLogParser::new();
    let record = parser.parse_line(COMBINED_LINE).unwrap();

    assert_eq!(record.get("remoteHost"), Some("192.168.1.20"));
    assert_eq!(record.get("request"), Some("POST /api/v1/data HTTP/1.1"));
    assert_eq!(record.get("status"), Some("201"));
    assert_eq!(record.get("sizeCLF"), Some("512"));
    assert_eq!(
        record.get("RequestHeader Referer"),
        Some("https://example.com/start")
    );
    assert_eq!(record.get("RequestHeader User-agent"), Some("curl/8.5.0"));
}

#[test]
fn clf_vhost_line() {
    let parser = AccessLogParser::from_preset(LogFormatPreset::ClfVhost);
    let line = format!("www.example.com {CLF_LINE}");
    let record = parser.parse_line(&line).unwrap();

    assert_eq!(record.get("canonicalServerName"), Some("www.example.com"));
    assert_eq!(record.get("remoteHost"), Some("127.0.0.1"));
    assert_eq!(record.get("status"), Some("200"));
}

#[test]
fn extracted_values_carry_no_delimiters() {
    let parser = AccessLogParser::new();
    let record = parser.parse_line(COMBINED_LINE).unwrap();
    for (name, value) in record.iter() {
        if name == ORIGINAL_LINE_KEY {
            continue;
        }
        assert!(!value.starts_with('"') && !value.ends_with('"'), "{name}: {value}");
        assert!(!value.starts_with('[') && !value.ends_with(']'), "{name}: {value}");
    }
}

// ─── 2. Record semantics ────────────────────────────────────────────────────

#[test]
fn record_keeps_original_line() {
    let parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    let record = parser.parse_line(CLF_LINE).unwrap();
    assert_eq!(record.original_line(), CLF_LINE);
    assert_eq!(record.get(ORIGINAL_LINE_KEY), Some(CLF_LINE));
    // 7 fields + the original line.
    assert_eq!(record.len(), 8);
}

#[test]
fn parse_line_is_idempotent() {
    let parser = AccessLogParser::new();
    let first = parser.parse_line(COMBINED_LINE).unwrap();
    let second = parser.parse_line(COMBINED_LINE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn colliding_field_names_last_write_wins() {
    let parser = AccessLogParser::with_format("%{Referer}i %{Referer}i").unwrap();
    let record = parser.parse_line("first second").unwrap();
    assert_eq!(record.get("RequestHeader Referer"), Some("second"));
}

#[test]
fn record_serializes_as_flat_json_object() {
    let parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    let record = parser.parse_line(CLF_LINE).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&accesslog_toolchain_core::to_pretty_json(&record).unwrap()).unwrap();
    assert_eq!(json["remoteHost"], "127.0.0.1");
    assert_eq!(json["originalLine"], CLF_LINE);
}

// ─── 3. Tolerant vs strict ──────────────────────────────────────────────────

// COMBINED_LINE truncated inside the request line: the closing quote of the
// request and everything after it are gone.
const TRUNCATED_LINE: &str =
    "192.168.1.20 - alice [29/Aug/2026:08:15:02 +0000] \"POST /api/v1/data HT";

#[test]
fn tolerant_mode_returns_best_effort_record() {
    let parser = AccessLogParser::new();
    let record = parser.parse_line(TRUNCATED_LINE).unwrap();

    // The quoted read ran to end of line; later fields degrade to empty.
    assert_eq!(record.get("request"), Some("POST /api/v1/data HT"));
    assert_eq!(record.get("status"), Some(""));
    assert_eq!(record.get("sizeCLF"), Some(""));
    assert_eq!(record.get("RequestHeader User-agent"), Some(""));
}

#[test]
fn strict_mode_rejects_missing_quote() {
    let mut parser = AccessLogParser::new();
    parser.set_stop_on_error(true);
    let err = parser.parse_line(TRUNCATED_LINE).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnquotedField {
            name: "RequestHeader Referer".to_string()
        }
    );
}

#[test]
fn strict_mode_rejects_unbracketed_time() {
    let mut parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    parser.set_stop_on_error(true);
    let line = "127.0.0.1 - frank 10/Oct/2000 \"GET / HTTP/1.0\" 200 2326";
    assert_eq!(
        parser.parse_line(line).unwrap_err(),
        ParseError::UnbracketedTime {
            name: "time".to_string()
        }
    );
}

#[test]
fn tolerant_mode_reads_unbracketed_time_best_effort() {
    let parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    let line = "127.0.0.1 - frank 10/Oct/2000 \"GET / HTTP/1.0\" 200 2326";
    let record = parser.parse_line(line).unwrap();
    // No opening bracket: the read runs to the (absent) closing bracket,
    // i.e. to end of line, and later fields come up empty.
    assert_eq!(
        record.get("time"),
        Some("10/Oct/2000 \"GET / HTTP/1.0\" 200 2326")
    );
    assert_eq!(record.get("status"), Some(""));
}

#[test]
fn tolerant_mode_never_fails_on_arbitrary_text() {
    let parser = AccessLogParser::new();
    for line in ["", "not a log line at all", "\"\"", "[[[", "a b c"] {
        let record = parser.parse_line(line).unwrap();
        assert_eq!(record.original_line(), line);
    }
}

// ─── 4. Colon-split extraction ──────────────────────────────────────────────

#[test]
fn colon_split_fields_pull_apart_composite_token() {
    let parser = AccessLogParser::with_format("%h:%b %s").unwrap();
    let record = parser.parse_line("example.org:8443 301").unwrap();
    assert_eq!(record.get("remoteHost"), Some("example.org"));
    assert_eq!(record.get("sizeCLF"), Some("8443"));
    assert_eq!(record.get("status"), Some("301"));
}

// ─── 5. Format management ───────────────────────────────────────────────────

#[test]
fn default_parser_uses_combined_preset() {
    let parser = AccessLogParser::default();
    assert_eq!(parser.format(), LogFormatPreset::Combined.spec());
    assert!(!parser.stop_on_error());
}

#[test]
fn get_format_returns_spec_as_written() {
    let spec = "%h  %>s";
    let parser = AccessLogParser::with_format(spec).unwrap();
    assert_eq!(parser.format(), spec);
}

#[test]
fn failed_set_format_leaves_previous_format_active() {
    let mut parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    assert!(parser.set_format("%h %Z").is_err());
    assert_eq!(parser.format(), LogFormatPreset::Clf.spec());

    // Still parses with the old format.
    let record = parser.parse_line(CLF_LINE).unwrap();
    assert_eq!(record.get("status"), Some("200"));
}

#[test]
fn set_format_replaces_compiled_descriptors() {
    let mut parser = AccessLogParser::from_preset(LogFormatPreset::Clf);
    parser.set_format("%h %b").unwrap();
    assert_eq!(parser.compiled().len(), 2);
    let record = parser.parse_line("10.0.0.1 4096").unwrap();
    assert_eq!(record.get("sizeCLF"), Some("4096"));
}
