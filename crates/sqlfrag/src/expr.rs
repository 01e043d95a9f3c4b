//! Extension points into expression and selection trees.
//!
//! These are the two boundaries where a fragment participates in a larger
//! query: as a SQL expression, with parenthesization decided by the
//! surrounding tree, or as one entry of a column-selection list. Raw text
//! carries no column structure, so the selection-side structural queries
//! fail fatally rather than guess.

use crate::context::GenContext;
use crate::fragment::Fragment;
use crate::ident::quote_identifier;

/// A table alias, as handed around while qualifying tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    name: String,
}

impl TableAlias {
    /// Create an alias.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The raw alias name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The quoted SQL rendering.
    pub fn quoted(&self) -> String {
        quote_identifier(&self.name)
    }
}

/// A type usable anywhere a SQL expression is expected.
pub trait Expression {
    /// Resolve as expression text, wrapped in `( … )` when the
    /// surrounding tree asks for it.
    fn expression_sql(&self, ctx: &mut GenContext, needs_parens: bool) -> String;

    /// Qualify column references with a table alias.
    fn qualified(self, alias: &TableAlias) -> Self;
}

/// A type usable as one entry of a column-selection list.
pub trait Selectable {
    /// Resolve as result-column text.
    fn result_column_sql(&self, ctx: &mut GenContext) -> String;

    /// SQL counting the rows this selection would produce.
    fn counted_sql(&self, ctx: &mut GenContext) -> String;

    /// Whether this selection is a `COUNT(DISTINCT …)`.
    fn is_distinct_count(&self) -> bool;

    /// How many result columns this selection expands to.
    fn column_count(&self) -> usize;

    /// Qualify column references with a table alias.
    fn qualified(self, alias: &TableAlias) -> Self;
}

/// A [`Fragment`] acting as an expression-tree node.
#[derive(Debug, Clone)]
pub struct RawExpr {
    fragment: Fragment,
}

impl RawExpr {
    /// Wrap a fragment.
    pub fn new(fragment: Fragment) -> Self {
        Self { fragment }
    }

    /// The wrapped fragment.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

impl Expression for RawExpr {
    fn expression_sql(&self, ctx: &mut GenContext, needs_parens: bool) -> String {
        let sql = self.fragment.resolve(ctx);
        if needs_parens { format!("({sql})") } else { sql }
    }

    // Raw text has no column references to rewrite.
    fn qualified(self, _alias: &TableAlias) -> Self {
        self
    }
}

/// A [`Fragment`] acting as a column-selection node.
///
/// A raw selection may expand to any number of columns (`*`, `a, b`), so
/// the structural queries of [`Selectable`] are undecidable here and
/// panic. Select [`RawExpr`] expressions instead when the surrounding
/// tree needs that structure.
#[derive(Debug, Clone)]
pub struct RawSelection {
    fragment: Fragment,
}

impl RawSelection {
    /// Wrap a fragment.
    pub fn new(fragment: Fragment) -> Self {
        Self { fragment }
    }

    /// The wrapped fragment.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

impl Selectable for RawSelection {
    fn result_column_sql(&self, ctx: &mut GenContext) -> String {
        self.fragment.resolve(ctx)
    }

    #[track_caller]
    fn counted_sql(&self, _ctx: &mut GenContext) -> String {
        panic!(
            "cannot count rows through a raw SQL selection: its column layout is unknown; \
             select RawExpr expressions instead"
        );
    }

    #[track_caller]
    fn is_distinct_count(&self) -> bool {
        panic!(
            "cannot tell whether a raw SQL selection is a distinct count; \
             select RawExpr expressions instead"
        );
    }

    #[track_caller]
    fn column_count(&self) -> usize {
        panic!(
            "cannot tell how many columns a raw SQL selection expands to; \
             select RawExpr expressions instead"
        );
    }

    // Raw text has no column references to rewrite.
    fn qualified(self, _alias: &TableAlias) -> Self {
        self
    }
}
