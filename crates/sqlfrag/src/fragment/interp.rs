//! Piece-by-piece fragment construction.

use super::{Fragment, Node};
use crate::value::Value;

/// Builds a fragment from interleaved literal-text and value pieces.
///
/// This is the construction path behind [`frag!`](crate::frag): literal
/// pieces append as SQL text, value pieces bind as arguments, in source
/// order. A value piece never splices into the text.
///
/// # Example
///
/// ```
/// use sqlfrag::Interpolation;
///
/// let mut pieces = Interpolation::new();
/// pieces.push_text("WHERE id = ");
/// pieces.push_value(42);
///
/// let (sql, args) = pieces.into_fragment().build();
/// assert_eq!(sql, "WHERE id = ?");
/// assert_eq!(args.positional().len(), 1);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct Interpolation {
    parts: Vec<Fragment>,
}

impl Interpolation {
    /// Start an empty interpolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal text piece.
    pub fn push_text(&mut self, sql: impl Into<String>) -> &mut Self {
        self.parts.push(Fragment::raw(sql));
        self
    }

    /// Append a value piece; it binds as an argument, never as text.
    pub fn push_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.parts.push(Fragment::value(value));
        self
    }

    /// Append an existing fragment as a piece.
    pub fn push_fragment(&mut self, fragment: Fragment) -> &mut Self {
        self.parts.push(fragment);
        self
    }

    /// Concatenate the pieces in source order.
    pub fn into_fragment(self) -> Fragment {
        Fragment {
            node: Node::Concat(self.parts),
        }
    }
}

impl From<Interpolation> for Fragment {
    fn from(pieces: Interpolation) -> Self {
        pieces.into_fragment()
    }
}
