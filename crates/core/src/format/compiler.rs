//! LogFormat specification compiler.
//!
//! Turns a format string such as `%h %l %u %t "%r" %>s %b` into an ordered
//! [`CompiledFormat`] of typed extraction rules. Field codes are resolved
//! against the tables in `accesslog_toolchain_field_tables`; any token that
//! cannot be resolved aborts compilation with a [`FormatError`].

use super::cursor::Cursor;
use super::descriptor::{CompiledFormat, FieldDescriptor};
use crate::error::FormatError;
use accesslog_toolchain_field_tables::FieldTables;

/// Compile a LogFormat specification string using the built-in field tables.
pub fn compile(spec: &str) -> Result<CompiledFormat, FormatError> {
    compile_with_tables(spec, FieldTables::builtin())
}

/// Compile a LogFormat specification string against the given field tables.
pub fn compile_with_tables(
    spec: &str,
    tables: &FieldTables,
) -> Result<CompiledFormat, FormatError> {
    let mut fields = Vec::new();
    let mut cur = Cursor::new(spec);
    while cur.has_more() {
        cur.skip_spaces();
        let token = cur.get_upto(' ');
        if token.is_empty() {
            continue;
        }

        // Colon-splitting is checked on the raw token, before quote or
        // bracket stripping. This matches httpd's composite `%t:%...`
        // date-plus-timezone convention, and (known quirk, preserved) also
        // fires on a literal `:` inside a quoted token.
        if token.contains(':') {
            for (i, part) in token.split(':').enumerate() {
                fields.push(compile_token(part, i == 0, tables)?);
            }
        } else {
            fields.push(compile_token(token, false, tables)?);
        }
    }
    Ok(CompiledFormat { fields })
}

/// Strip a single pair of enclosing `"` or `[` `]` characters, if both are
/// present. Anything else is returned unchanged.
fn strip_enclosing(token: &str) -> &str {
    let stripped = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| token.strip_prefix('[').and_then(|t| t.strip_suffix(']')));
    stripped.unwrap_or(token)
}

/// Classify and resolve one whitespace-delimited format token (or one part
/// of a colon-split token) into a [`FieldDescriptor`].
fn compile_token(
    raw: &str,
    has_colon: bool,
    tables: &FieldTables,
) -> Result<FieldDescriptor, FormatError> {
    let is_quoted = raw.starts_with('"');
    let token = strip_enclosing(raw);

    let token = token
        .strip_prefix('%')
        .ok_or_else(|| FormatError::MissingPercent {
            token: raw.to_string(),
        })?;

    // Status-code filters (as in `%!404{Referer}i`) sit between the `%` and
    // the `{`. They modify whether httpd logs the field, not which field it
    // is, so they are stripped here.
    let token = if token.find('{').is_some_and(|i| i > 0) {
        token.trim_start_matches(|c: char| c.is_ascii_digit() || c == '!')
    } else {
        token
    };

    // `<`/`>` request/response qualifiers (as in `%>s`) likewise do not
    // change the extracted field's identity.
    let token: String = token.chars().filter(|&c| c != '<' && c != '>').collect();

    // Parameterized field: `{param}code`, e.g. `{Referer}i`.
    if let Some(open) = token.find('{') {
        let close = token
            .rfind('}')
            .filter(|&close| close > open)
            .ok_or_else(|| FormatError::MalformedParameter {
                token: token.clone(),
            })?;
        let param = &token[open + 1..close];
        let code = &token[close + 1..];
        let prefix =
            tables
                .param_prefix(code)
                .ok_or_else(|| FormatError::NotParameterizable {
                    code: code.to_string(),
                })?;
        return Ok(FieldDescriptor::new(
            code.to_string(),
            format!("{prefix} {param}"),
            is_quoted,
            code == "t",
            has_colon,
        ));
    }

    // Plain field: the remaining token must be a base field code.
    let name = tables
        .base_name(&token)
        .ok_or_else(|| FormatError::UnknownField {
            code: token.clone(),
        })?;
    let is_date = token == "t";
    Ok(FieldDescriptor::new(
        token,
        name.to_string(),
        is_quoted,
        is_date,
        has_colon,
    ))
}
