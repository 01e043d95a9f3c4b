//! # sqlfrag
//!
//! Deferred, parameter-safe SQL fragment composition.
//!
//! ## Features
//!
//! - **Deferred**: fragments are immutable descriptions; nothing renders
//!   until a resolution walks the tree once against a [`GenContext`]
//! - **Parameter-safe**: interpolated values always bind as arguments,
//!   never splice into the SQL text
//! - **Style-agnostic**: the final consumer picks `?` / `$n` / `@pn`
//!   placeholders at resolution time, not at construction time
//! - **Composable**: `+` / `+=` concatenation, [`Fragment::join`],
//!   [`Fragment::map_sql`], and the [`frag!`] interpolation macro
//! - **Inlinable**: an inline-only resolution renders values as quoted
//!   SQL literals for logging and display
//!
//! ## Example
//!
//! ```
//! use sqlfrag::{frag, Fragment, PlaceholderStyle};
//!
//! let status = "active";
//! let mut query = frag!("SELECT id, name FROM users WHERE status = " {status});
//! query += Fragment::raw(" ORDER BY name");
//!
//! let (sql, args) = query.build_with(PlaceholderStyle::Dollar);
//! assert_eq!(sql, "SELECT id, name FROM users WHERE status = $1 ORDER BY name");
//! assert_eq!(args.positional().len(), 1);
//! ```
//!
//! ## Fatal misuse
//!
//! Two usage errors are bugs at the call site and panic rather than
//! returning `Err`: appending a pre-bound argument container to an
//! inline-only resolution (see [`GenContext::inlined`]), and asking a
//! raw selection for column structure it cannot know (see
//! [`RawSelection`]). Everything genuinely fallible returns
//! [`FragResult`].

pub mod args;
pub mod context;
pub mod error;
pub mod expr;
pub mod fragment;
pub mod ident;
pub mod prelude;
pub mod value;

mod macros;

pub use args::Arguments;
pub use context::{GenContext, PlaceholderStyle};
pub use error::{FragError, FragResult};
pub use expr::{Expression, RawExpr, RawSelection, Selectable, TableAlias};
pub use fragment::{Fragment, Interpolation};
pub use ident::{Ident, quote_identifier};
pub use value::Value;

/// Start a fragment from literal SQL.
///
/// Shorthand for [`Fragment::raw`], mirroring how composed statements
/// usually begin:
///
/// ```
/// use sqlfrag::{raw, Fragment};
///
/// let query = raw("SELECT 1") + Fragment::raw(" WHERE 1 = 1");
/// assert_eq!(query.build().0, "SELECT 1 WHERE 1 = 1");
/// ```
pub fn raw(sql: impl Into<String>) -> Fragment {
    Fragment::raw(sql)
}
