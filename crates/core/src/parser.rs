//! The access-log parser facade: holds a compiled format plus the strictness
//! flag, and tokenizes lines against it.

use crate::error::{FormatError, ParseError};
use crate::format::{self, CompiledFormat, Convention, Cursor};
use crate::record::ParsedRecord;
use accesslog_toolchain_field_tables::LogFormatPreset;

/// Parses access-log lines according to a compiled LogFormat specification.
///
/// Compile the format once (construction or [`set_format`]), then call
/// [`parse_line`] once per line. A parser holds no per-line state, so a
/// shared reference can drive parse calls from multiple call sites.
///
/// [`set_format`]: AccessLogParser::set_format
/// [`parse_line`]: AccessLogParser::parse_line
#[derive(Debug, Clone)]
pub struct AccessLogParser {
    spec: String,
    compiled: CompiledFormat,
    stop_on_error: bool,
}

impl AccessLogParser {
    /// Create a parser for the NCSA combined format.
    pub fn new() -> Self {
        Self::from_preset(LogFormatPreset::Combined)
    }

    /// Create a parser for one of the built-in presets.
    pub fn from_preset(preset: LogFormatPreset) -> Self {
        match Self::with_format(preset.spec()) {
            Ok(parser) => parser,
            Err(e) => unreachable!("built-in preset {preset} failed to compile: {e}"),
        }
    }

    /// Create a parser from a LogFormat specification string.
    pub fn with_format(spec: &str) -> Result<Self, FormatError> {
        let compiled = format::compile(spec)?;
        Ok(Self {
            spec: spec.to_string(),
            compiled,
            stop_on_error: false,
        })
    }

    /// Replace the active format. Compilation happens before anything is
    /// replaced, so a malformed spec leaves the previous format in effect.
    pub fn set_format(&mut self, spec: &str) -> Result<(), FormatError> {
        let compiled = format::compile(spec)?;
        self.compiled = compiled;
        self.spec = spec.to_string();
        Ok(())
    }

    /// The last specification string set, as written (not the compiled
    /// descriptors).
    pub fn format(&self) -> &str {
        &self.spec
    }

    /// The compiled descriptor sequence for the active format.
    pub fn compiled(&self) -> &CompiledFormat {
        &self.compiled
    }

    /// When enabled, a structural mismatch (missing quote or bracket) fails
    /// the line instead of being tolerated. Disabled by default.
    pub fn set_stop_on_error(&mut self, stop_on_error: bool) {
        self.stop_on_error = stop_on_error;
    }

    /// Whether structural mismatches fail the line.
    pub fn stop_on_error(&self) -> bool {
        self.stop_on_error
    }

    /// Tokenize one log line into a [`ParsedRecord`].
    ///
    /// Fields are extracted left to right, one per compiled descriptor, each
    /// according to its [`Convention`]. With `stop_on_error` disabled (the
    /// default) this always returns a record: a missing delimiter degrades
    /// to a best-effort read rather than an error.
    pub fn parse_line(&self, line: &str) -> Result<ParsedRecord, ParseError> {
        let mut record = ParsedRecord::new(line);
        let mut cur = Cursor::new(line);

        for field in &self.compiled {
            cur.skip_spaces();
            let value = match field.convention {
                Convention::Quoted => {
                    if cur.looking_at() == Some('"') {
                        cur.skip();
                    } else if self.stop_on_error {
                        return Err(ParseError::UnquotedField {
                            name: field.name.clone(),
                        });
                    }
                    let value = cur.get_upto('"');
                    cur.skip();
                    value
                }
                Convention::Bracketed => {
                    if cur.looking_at() == Some('[') {
                        cur.skip();
                    } else if self.stop_on_error {
                        return Err(ParseError::UnbracketedTime {
                            name: field.name.clone(),
                        });
                    }
                    let value = cur.get_upto(']');
                    cur.skip();
                    value
                }
                Convention::ColonSplit => {
                    let value = cur.get_upto(':');
                    cur.skip();
                    value
                }
                // The space is left unconsumed; the next field's leading
                // skip_spaces takes care of it.
                Convention::Plain => cur.get_upto(' '),
            };
            record.insert(field.name.clone(), value.to_string());
        }

        Ok(record)
    }
}

impl Default for AccessLogParser {
    fn default() -> Self {
        Self::new()
    }
}
