//! Identifier quoting for fragments.
//!
//! Identifiers cannot be parameterized, so dynamic table and column names
//! are spliced into SQL text. Quoting here is unconditional: the name is
//! wrapped in double quotes with embedded quotes doubled, which is safe
//! for any name the engine itself can represent.

use crate::error::{FragError, FragResult};

/// Quote `name` as a SQL identifier.
///
/// # Example
/// ```
/// assert_eq!(sqlfrag::quote_identifier("user table"), r#""user table""#);
/// assert_eq!(sqlfrag::quote_identifier(r#"a"b"#), r#""a""b""#);
/// ```
pub fn quote_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// A validated identifier.
///
/// [`quote_identifier`] accepts anything; `Ident` additionally rejects the
/// names no engine can represent (empty, embedded NUL) so the error
/// surfaces where the name is introduced instead of at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    /// Validate `name` as an identifier.
    pub fn new(name: impl Into<String>) -> FragResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FragError::invalid_identifier("identifier cannot be empty"));
        }
        if name.contains('\0') {
            return Err(FragError::invalid_identifier(
                "identifier cannot contain a NUL byte",
            ));
        }
        Ok(Self(name))
    }

    /// The unquoted name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The quoted SQL rendering.
    pub fn quoted(&self) -> String {
        quote_identifier(&self.0)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.quoted())
    }
}
