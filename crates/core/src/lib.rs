//! Access-log toolchain core library.
//!
//! Compiles Apache `LogFormat` specification strings into typed field
//! descriptors and tokenizes access-log lines against them. The main entry
//! points are [`AccessLogParser`] for line parsing and [`format::compile`]
//! for compiling a specification on its own.
//!
//! Timestamps are extracted as opaque bracketed strings; no date/time
//! conversion happens here.

#![warn(missing_docs)]

/// Format/parse error types.
pub mod error;
/// LogFormat grammar: cursor, compiler, and compiled descriptors.
pub mod format;
/// The parser facade driving the line tokenizer.
pub mod parser;
/// Parsed line records.
pub mod record;

/// JSON serialization helpers.
pub mod dump;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

pub use error::{FormatError, ParseError};
pub use format::{CompiledFormat, Convention, FieldDescriptor};
pub use parser::AccessLogParser;
pub use record::{ORIGINAL_LINE_KEY, ParsedRecord};

pub use accesslog_toolchain_field_tables::{FieldTables, LogFormatPreset};

pub use dump::to_pretty_json;
