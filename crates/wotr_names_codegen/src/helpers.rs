//! Helper functions for code generation.

use proc_macro2::Literal;

/// Render `value` as a Rust string literal, quotes included.
///
/// Blueprint names come straight from game data, so quotes and backslashes
/// must be escaped rather than pasted in.
pub fn str_literal(value: &str) -> String {
    Literal::string(value).to_string()
}
