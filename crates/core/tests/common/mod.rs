//! Shared test helpers for `accesslog_toolchain_core` integration tests.

#![allow(unreachable_pub)]

use accesslog_toolchain_core::format::CompiledFormat;

/// The CLF example line from the Apache docs.
#[allow(dead_code)]
pub const CLF_LINE: &str =
    "127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] \"GET /apache_pb.gif HTTP/1.0\" 200 2326";

/// Count the `%`-tokens a spec string should compile to, colon-splitting
/// included: each whitespace-delimited token contributes one descriptor per
/// colon-separated part.
#[allow(dead_code)]
pub fn expected_descriptor_count(spec: &str) -> usize {
    spec.split_whitespace()
        .map(|tok| tok.split(':').count())
        .sum()
}

/// Collect descriptor names in compilation order.
#[allow(dead_code)]
pub fn descriptor_names(compiled: &CompiledFormat) -> Vec<&str> {
    compiled.iter().map(|f| f.name.as_str()).collect()
}

/// Collect descriptor codes in compilation order.
#[allow(dead_code)]
pub fn descriptor_codes(compiled: &CompiledFormat) -> Vec<&str> {
    compiled.iter().map(|f| f.code.as_str()).collect()
}
