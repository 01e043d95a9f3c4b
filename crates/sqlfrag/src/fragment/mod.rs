//! Deferred SQL fragments.
//!
//! A [`Fragment`] is an immutable description of SQL-to-be: literal text,
//! values that will bind as arguments, and compositions of other
//! fragments. Nothing renders at construction time. Resolution walks the
//! tree exactly once against a [`GenContext`], producing the final SQL
//! text while the context accumulates the bound arguments in walk order.
//!
//! # Example
//!
//! ```
//! use sqlfrag::Fragment;
//!
//! let mut query = Fragment::raw("SELECT * FROM users WHERE age >= ") + Fragment::value(21);
//! query += Fragment::raw(" ORDER BY name");
//!
//! let (sql, args) = query.build();
//! assert_eq!(sql, "SELECT * FROM users WHERE age >= ? ORDER BY name");
//! assert_eq!(args.positional().len(), 1);
//! ```

mod interp;

#[cfg(test)]
mod tests;

pub use interp::Interpolation;

use std::fmt;
use std::ops::{Add, AddAssign};
use std::sync::Arc;

use crate::args::Arguments;
use crate::context::{GenContext, PlaceholderStyle};
use crate::expr::{RawExpr, RawSelection};
use crate::ident::quote_identifier;
use crate::value::Value;

/// Internal tree node; leaves carry text or a value, interior nodes
/// compose.
#[derive(Clone)]
enum Node {
    /// Literal SQL with optional pre-bound arguments.
    Text { sql: String, args: Arguments },
    /// One interpolated value; renders as a placeholder plus one argument.
    Value(Value),
    /// Concatenation with no separator.
    Concat(Vec<Fragment>),
    /// Rewrites the resolved text of the inner fragment; arguments pass
    /// through untouched.
    Transform {
        inner: Box<Fragment>,
        map: Arc<dyn Fn(String) -> String + Send + Sync>,
    },
    /// Elements resolved in order with `separator` between consecutive
    /// ones.
    Join {
        elements: Vec<Fragment>,
        separator: String,
    },
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { sql, args } => f
                .debug_struct("Text")
                .field("sql", sql)
                .field("args", args)
                .finish(),
            Node::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Node::Concat(parts) => f.debug_tuple("Concat").field(parts).finish(),
            Node::Transform { inner, .. } => f
                .debug_struct("Transform")
                .field("inner", inner)
                .field("map", &"<fn>")
                .finish(),
            Node::Join {
                elements,
                separator,
            } => f
                .debug_struct("Join")
                .field("elements", elements)
                .field("separator", separator)
                .finish(),
        }
    }
}

/// A deferred, immutable unit of SQL text plus the arguments it
/// contributes when resolved.
#[must_use]
#[derive(Clone)]
pub struct Fragment {
    node: Node,
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fragment").field(&self.node).finish()
    }
}

impl Fragment {
    /// Literal SQL with no arguments.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            node: Node::Text {
                sql: sql.into(),
                args: Arguments::new(),
            },
        }
    }

    /// Literal SQL with pre-bound arguments.
    ///
    /// The text is taken as-is: it is never scanned, and this constructor
    /// does not reconcile placeholders in `sql` with `args`. The caller
    /// owns that agreement; [`PlaceholderStyle::check`] audits it on
    /// demand.
    pub fn raw_with(sql: impl Into<String>, args: Arguments) -> Self {
        Self {
            node: Node::Text {
                sql: sql.into(),
                args,
            },
        }
    }

    /// A single interpolated value.
    ///
    /// The value never splices into the text: it renders as a placeholder
    /// and binds as an argument, or as a quoted literal under inline-only
    /// resolution.
    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            node: Node::Value(value.into()),
        }
    }

    /// A quoted identifier; see [`quote_identifier`].
    pub fn identifier(name: &str) -> Self {
        Self::raw(quote_identifier(name))
    }

    /// The empty fragment: resolves to `""` with no arguments.
    pub fn empty() -> Self {
        Self::raw("")
    }

    /// Join `fragments` with `separator` between consecutive elements.
    ///
    /// The input is materialized up front, so single-pass iterators are
    /// fine. An empty input joins to the empty fragment; a single element
    /// resolves with no separator at all.
    pub fn join<I>(fragments: I, separator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        Self {
            node: Node::Join {
                elements: fragments.into_iter().collect(),
                separator: separator.into(),
            },
        }
    }

    /// Rewrite the resolved text of this fragment, leaving its arguments
    /// untouched.
    ///
    /// The rewrite runs on the text the wrapped fragment resolves to, so
    /// it composes with argument accumulation without reordering
    /// anything.
    pub fn map_sql(self, map: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        Self {
            node: Node::Transform {
                inner: Box::new(self),
                map: Arc::new(map),
            },
        }
    }

    /// Resolve against `ctx`, returning the SQL text while the context
    /// accumulates this fragment's arguments.
    ///
    /// The walk is depth-first and left-to-right, so nested arguments
    /// land in construction order, and each value is appended exactly
    /// once per resolution. Resolving the same fragment against two
    /// contexts is fully independent; all mutable state lives in the
    /// context.
    pub fn resolve(&self, ctx: &mut GenContext) -> String {
        match &self.node {
            Node::Text { sql, args } => {
                if !args.is_empty() {
                    ctx.bind_all(args);
                }
                sql.clone()
            }
            Node::Value(value) => ctx.bind(value),
            Node::Concat(parts) => {
                let mut out = String::new();
                for part in parts {
                    out.push_str(&part.resolve(ctx));
                }
                out
            }
            Node::Transform { inner, map } => map(inner.resolve(ctx)),
            Node::Join {
                elements,
                separator,
            } => {
                let mut out = String::new();
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(separator);
                    }
                    out.push_str(&element.resolve(ctx));
                }
                out
            }
        }
    }

    /// Resolve with a fresh collecting context in the default placeholder
    /// style, returning SQL and arguments as one pair.
    ///
    /// Prefer this over two separate resolutions: the pair comes from a
    /// single walk, so the text and the arguments always belong together.
    pub fn build(&self) -> (String, Arguments) {
        self.build_with(PlaceholderStyle::default())
    }

    /// Resolve with a fresh collecting context in `style`.
    pub fn build_with(&self, style: PlaceholderStyle) -> (String, Arguments) {
        let mut ctx = GenContext::new(style);
        let sql = self.resolve(&mut ctx);
        let args = ctx.into_args();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlfrag",
            sql = %truncated(&sql),
            args = args.len(),
            style = ?style,
            "fragment resolved"
        );

        (sql, args)
    }

    /// Wrap this fragment for use anywhere an expression is expected.
    pub fn into_expr(self) -> RawExpr {
        RawExpr::new(self)
    }

    /// Wrap this fragment for use as an entry of a column-selection list.
    pub fn into_selection(self) -> RawSelection {
        RawSelection::new(self)
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Into<Fragment>> Add<R> for Fragment {
    type Output = Fragment;

    fn add(mut self, rhs: R) -> Fragment {
        let rhs = rhs.into();
        // Appending into an existing concatenation preserves
        // left-to-right resolution order.
        if let Node::Concat(parts) = &mut self.node {
            parts.push(rhs);
            return self;
        }
        Fragment {
            node: Node::Concat(vec![self, rhs]),
        }
    }
}

impl<R: Into<Fragment>> AddAssign<R> for Fragment {
    fn add_assign(&mut self, rhs: R) {
        let lhs = std::mem::take(self);
        *self = lhs + rhs;
    }
}

impl From<&str> for Fragment {
    fn from(sql: &str) -> Self {
        Fragment::raw(sql)
    }
}

impl From<String> for Fragment {
    fn from(sql: String) -> Self {
        Fragment::raw(sql)
    }
}

#[cfg(feature = "tracing")]
fn truncated(sql: &str) -> &str {
    const MAX_BYTES: usize = 200;
    if sql.len() <= MAX_BYTES {
        return sql;
    }
    let mut end = MAX_BYTES;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
