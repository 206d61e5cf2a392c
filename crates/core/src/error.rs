use thiserror::Error;

/// Errors raised while compiling a LogFormat specification string.
///
/// Any of these aborts the whole compilation; a format is never partially
/// applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A token in the format string does not begin with `%`.
    #[error("field does not start with %: {token}")]
    MissingPercent {
        /// The offending token as written in the format string.
        token: String,
    },

    /// A parameterized token's trailing code is not in the parameterized
    /// field table (e.g. `%{x}r`).
    #[error("the field {code} should not be parameterized")]
    NotParameterizable {
        /// The trailing field code.
        code: String,
    },

    /// A plain token's code is not in the base field table.
    #[error("unknown log format field {code}")]
    UnknownField {
        /// The unresolvable field code.
        code: String,
    },

    /// A token contains `{` without a matching `}`.
    #[error("malformed parameterized field: {token}")]
    MalformedParameter {
        /// The offending token, modifiers stripped.
        token: String,
    },
}

/// Errors raised while tokenizing a log line, only when `stop_on_error` is
/// enabled. With it disabled (the default) the same conditions are tolerated
/// and extraction continues best-effort.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A field compiled as quoted did not start with `"` in the line.
    #[error("field {name} defined as quoted was not quoted")]
    UnquotedField {
        /// The field's resolved name.
        name: String,
    },

    /// A time field was not enclosed in `[`...`]` in the line.
    #[error("time field {name} is not enclosed in brackets")]
    UnbracketedTime {
        /// The field's resolved name.
        name: String,
    },
}
