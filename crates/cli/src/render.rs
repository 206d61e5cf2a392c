//! Output rendering for parsed records and compiled formats.
//!
//! Two modes: `json` emits machine-readable output (one JSON object per
//! parsed line), `pretty` emits aligned human-readable blocks. When the
//! user does not choose, the mode follows whether stdout is a terminal.

use std::io::{self, IsTerminal};

use accesslog_toolchain_core::format::{CompiledFormat, Convention};
use accesslog_toolchain_core::{ORIGINAL_LINE_KEY, ParsedRecord};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for record rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Aligned human-readable output.
    Pretty,
    /// Machine-readable JSON (NDJSON for record streams).
    Json,
}

impl Format {
    /// Resolve an explicit `--output` value, defaulting by TTY detection.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Record rendering ────────────────────────────────────────────────────

/// Render one parsed record as a compact JSON object on a single line.
pub(crate) fn render_record_json(record: &ParsedRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Render one parsed record as an aligned `name: value` block.
pub(crate) fn render_record_pretty(record: &ParsedRecord) -> String {
    let width = record
        .iter()
        .filter(|(name, _)| *name != ORIGINAL_LINE_KEY)
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, value) in record.iter() {
        if name == ORIGINAL_LINE_KEY {
            continue;
        }
        out.push_str(&format!("{name:width$}  {value}\n"));
    }
    out
}

// ── Compiled-format rendering ───────────────────────────────────────────

fn convention_label(convention: Convention) -> &'static str {
    match convention {
        Convention::Quoted => "quoted",
        Convention::Bracketed => "bracketed",
        Convention::ColonSplit => "colon-split",
        Convention::Plain => "plain",
    }
}

/// Render a compiled format's descriptors as an aligned table.
pub(crate) fn render_format_pretty(compiled: &CompiledFormat) -> String {
    let width = compiled.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for field in compiled {
        out.push_str(&format!(
            "%{code:<4} {name:width$}  {conv}\n",
            code = field.code,
            name = field.name,
            conv = convention_label(field.convention),
        ));
    }
    out
}
