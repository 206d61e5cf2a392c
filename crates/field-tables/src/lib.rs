//! Apache LogFormat field tables.
//!
//! Defines the mapping from `%`-directive field codes to the field names
//! emitted in parsed records, the prefix table for parameterized fields
//! (`%{Referer}i`-style), and the built-in [`LogFormatPreset`]s. These tables
//! are consumed by the format compiler in `accesslog_toolchain_core`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Base field codes in definition order, mirroring httpd's directive table.
///
/// Note the duplicate `p` and `P` entries near the end: httpd's own table
/// defines them twice, and the effective mapping is the *last* one
/// (`p` → `formatPort`, `P` → `pidFormat`). The duplicates are kept here so
/// the last-definition-wins behavior stays auditable.
const BASE_FIELDS: &[(&str, &str)] = &[
    ("a", "remoteIP"),
    ("A", "localIP"),
    ("B", "size"),
    ("b", "sizeCLF"),
    ("D", "serveTime"),
    ("f", "filename"),
    ("h", "remoteHost"),
    ("H", "requestProtocol"),
    ("k", "keepaliveRequests"),
    ("l", "logname"),
    ("m", "requestMethod"),
    ("p", "port"),
    ("P", "pid"),
    ("q", "queryString"),
    ("r", "request"),
    ("R", "responseHandler"),
    ("s", "status"),
    ("t", "time"),
    ("T", "serveTime"),
    ("u", "remoteUser"),
    ("U", "urlPath"),
    ("v", "canonicalServerName"),
    ("V", "serverName"),
    ("X", "connectionStatus"),
    ("I", "bytesReceived"),
    ("O", "bytesSent"),
    ("C", "cookie"),
    ("e", "environment"),
    ("i", "requestHeader"),
    ("n", "note"),
    ("o", "responseHeader"),
    ("p", "formatPort"),
    ("P", "pidFormat"),
    ("^ti", "requestTrailerLine"),
    ("^to", "responseTrailerLine"),
];

/// Parameterized field codes and the name prefix used when expanding them.
///
/// A directive like `%{Referer}i` resolves to the field name
/// `"<prefix> <param>"`, e.g. `"RequestHeader Referer"`.
const PARAM_FIELDS: &[(&str, &str)] = &[
    ("c", "Cookie"),
    ("e", "Environment"),
    ("i", "RequestHeader"),
    ("n", "Note"),
    ("o", "ResponseHeader"),
    ("p", "Port"),
    ("P", "PID"),
    ("t", "Time"),
    ("^ti", "RequestTrailerLine"),
    ("^to", "ResponseTrailerLine"),
];

/// Lookup tables for resolving LogFormat field codes to field names.
#[derive(Debug)]
pub struct FieldTables {
    base: HashMap<&'static str, &'static str>,
    param: HashMap<&'static str, &'static str>,
}

impl FieldTables {
    /// Build the tables from the built-in definition slices.
    fn from_builtin_defs() -> Self {
        // Insertion order matters: duplicate codes overwrite earlier entries.
        let mut base = HashMap::with_capacity(BASE_FIELDS.len());
        for &(code, name) in BASE_FIELDS {
            base.insert(code, name);
        }
        let mut param = HashMap::with_capacity(PARAM_FIELDS.len());
        for &(code, prefix) in PARAM_FIELDS {
            param.insert(code, prefix);
        }
        Self { base, param }
    }

    /// Returns the process-wide built-in tables, constructed on first access.
    pub fn builtin() -> &'static FieldTables {
        static TABLES: OnceLock<FieldTables> = OnceLock::new();
        TABLES.get_or_init(FieldTables::from_builtin_defs)
    }

    /// Resolve a plain field code (e.g. `"h"`) to its field name.
    pub fn base_name(&self, code: &str) -> Option<&'static str> {
        self.base.get(code).copied()
    }

    /// Resolve a parameterized field code (e.g. `"i"`) to its name prefix.
    pub fn param_prefix(&self, code: &str) -> Option<&'static str> {
        self.param.get(code).copied()
    }
}

/// Built-in LogFormat presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormatPreset {
    /// NCSA combined: CLF plus referer and user-agent headers.
    Combined,
    /// NCSA Common Log Format.
    Clf,
    /// CLF prefixed with the canonical server name.
    ClfVhost,
}

impl LogFormatPreset {
    /// All presets, in definition order.
    pub const ALL: [LogFormatPreset; 3] = [
        LogFormatPreset::Combined,
        LogFormatPreset::Clf,
        LogFormatPreset::ClfVhost,
    ];

    /// The LogFormat specification string for this preset.
    pub fn spec(self) -> &'static str {
        match self {
            LogFormatPreset::Combined => {
                "%h %l %u %t \"%r\" %>s %b \"%{Referer}i\" \"%{User-agent}i\""
            }
            LogFormatPreset::Clf => "%h %l %u %t \"%r\" %>s %b",
            LogFormatPreset::ClfVhost => "%v %h %l %u %t \"%r\" %>s %b",
        }
    }
}

impl fmt::Display for LogFormatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormatPreset::Combined => write!(f, "combined"),
            LogFormatPreset::Clf => write!(f, "clf"),
            LogFormatPreset::ClfVhost => write!(f, "clf_vhost"),
        }
    }
}
