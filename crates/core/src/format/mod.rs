//! LogFormat grammar: the scanning cursor, the specification compiler, and
//! the compiled descriptor types.

/// Format-specification compiler.
pub mod compiler;
/// Forward-only string scanner shared by the compiler and the tokenizer.
pub mod cursor;
/// Compiled field descriptors and their extraction conventions.
pub mod descriptor;

pub use compiler::{compile, compile_with_tables};
pub use cursor::Cursor;
pub use descriptor::{CompiledFormat, Convention, FieldDescriptor};
