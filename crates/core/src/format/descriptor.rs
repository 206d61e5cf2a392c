use serde::{Deserialize, Serialize};

/// How one field's value is delimited within a log line.
///
/// The classification is decided once when the format is compiled, so the
/// tokenizer does a single dispatch per field instead of re-deriving the
/// convention for every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Enclosed in double quotes, e.g. the request line in `"%r"`.
    Quoted,
    /// Enclosed in square brackets; used by the `%t` time field.
    Bracketed,
    /// First part of a colon-joined composite token; reads up to the next
    /// `:` and consumes it.
    ColonSplit,
    /// Reads up to the next space. The space is left for the following
    /// field's leading space-skip.
    Plain,
}

/// One compiled extraction rule: a field code, the record key its value is
/// stored under, and the delimiting convention to extract it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The resolved field code, `%`-prefix and modifiers stripped
    /// (e.g. `"h"`, `"i"`, `"^ti"`).
    pub code: String,
    /// The record key for the extracted value
    /// (e.g. `"remoteHost"`, `"RequestHeader Referer"`).
    pub name: String,
    /// The extraction convention for this field.
    pub convention: Convention,
}

impl FieldDescriptor {
    /// Build a descriptor from the three classification flags, applying the
    /// tokenizer's precedence: quoted beats date-bracketed beats colon-split.
    pub(crate) fn new(
        code: String,
        name: String,
        is_quoted: bool,
        is_date: bool,
        has_colon: bool,
    ) -> Self {
        let convention = if is_quoted {
            Convention::Quoted
        } else if is_date {
            Convention::Bracketed
        } else if has_colon {
            Convention::ColonSplit
        } else {
            Convention::Plain
        };
        Self {
            code,
            name,
            convention,
        }
    }
}

/// An ordered sequence of [`FieldDescriptor`]s compiled from one LogFormat
/// specification string. Order is significant: it is the left-to-right layout
/// the tokenizer expects each log line to follow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledFormat {
    /// Descriptors in extraction order.
    pub fields: Vec<FieldDescriptor>,
}

impl CompiledFormat {
    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the format compiled to no descriptors (empty spec string).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate descriptors in extraction order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a CompiledFormat {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
