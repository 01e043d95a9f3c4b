//! Per-resolution generation state.
//!
//! A [`GenContext`] is created fresh for one resolution pass, threaded
//! through the fragment walk, and then consumed for its accumulated
//! [`Arguments`]. All mutable state lives here; fragments themselves stay
//! immutable and reusable across any number of resolutions.

use std::iter::Peekable;
use std::str::Chars;

use crate::args::Arguments;
use crate::error::{FragError, FragResult};
use crate::value::Value;

/// Placeholder rendering style, decided by the final consumer of a
/// resolution rather than by the fragment author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` positional markers (SQLite, MySQL).
    #[default]
    Question,
    /// `$1, $2, …` numbered markers (PostgreSQL).
    Dollar,
    /// `@p1, @p2, …` markers (SQL Server).
    AtP,
}

impl PlaceholderStyle {
    /// Render the placeholder for a 1-based bind index.
    pub fn render(self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Dollar => format!("${index}"),
            PlaceholderStyle::AtP => format!("@p{index}"),
        }
    }

    /// Count the placeholders this style sees in rendered SQL.
    ///
    /// Single-quoted and double-quoted runs are skipped, so a literal `?`
    /// inside a string does not count. For numbered styles the result is
    /// the highest index referenced: repeated `$1` markers still agree
    /// with a single bound value.
    pub fn count_in(self, sql: &str) -> usize {
        let mut question_marks = 0usize;
        let mut max_index = 0usize;
        let mut chars = sql.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                // Quoted run; doubled quotes stay inside it.
                '\'' | '"' => {
                    while let Some(c) = chars.next() {
                        if c == ch {
                            if chars.peek() == Some(&ch) {
                                chars.next();
                            } else {
                                break;
                            }
                        }
                    }
                }
                '?' if self == PlaceholderStyle::Question => question_marks += 1,
                '$' if self == PlaceholderStyle::Dollar => {
                    max_index = max_index.max(read_index(&mut chars));
                }
                '@' if self == PlaceholderStyle::AtP => {
                    if matches!(chars.peek(), Some(&'p') | Some(&'P')) {
                        chars.next();
                        max_index = max_index.max(read_index(&mut chars));
                    }
                }
                _ => {}
            }
        }

        match self {
            PlaceholderStyle::Question => question_marks,
            PlaceholderStyle::Dollar | PlaceholderStyle::AtP => max_index,
        }
    }

    /// Audit resolved SQL against its argument container.
    ///
    /// Nothing runs this implicitly: the raw constructors never scan or
    /// rewrite SQL, and callers who mix hand-written placeholders with
    /// pre-bound containers own the agreement between the two. This check
    /// is the opt-in audit for that contract.
    pub fn check(self, sql: &str, args: &Arguments) -> FragResult<()> {
        let placeholders = self.count_in(sql);
        let arguments = args.positional().len();
        if placeholders != arguments {
            return Err(FragError::ArityMismatch {
                placeholders,
                arguments,
            });
        }
        Ok(())
    }
}

/// Read a decimal index off the front of `chars`; 0 when none is present.
fn read_index(chars: &mut Peekable<Chars<'_>>) -> usize {
    let mut index = 0usize;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        index = index.saturating_mul(10).saturating_add(digit as usize);
        chars.next();
    }
    index
}

/// Mutable state threaded through one resolution pass.
#[derive(Debug)]
pub struct GenContext {
    style: PlaceholderStyle,
    inline_only: bool,
    args: Arguments,
}

impl GenContext {
    /// Create a collecting context: interpolated values render as
    /// placeholders and their arguments accumulate here.
    pub fn new(style: PlaceholderStyle) -> Self {
        Self {
            style,
            inline_only: false,
            args: Arguments::new(),
        }
    }

    /// Create an inline-only context: values render as SQL literals and
    /// no argument container may be appended.
    ///
    /// Useful for logging or displaying a statement without carrying a
    /// live argument container next to it.
    pub fn inlined() -> Self {
        Self {
            style: PlaceholderStyle::default(),
            inline_only: true,
            args: Arguments::new(),
        }
    }

    /// Whether this context accepts bound arguments.
    pub fn accepts_arguments(&self) -> bool {
        !self.inline_only
    }

    /// The placeholder style of this resolution.
    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// The arguments accumulated so far.
    pub fn args(&self) -> &Arguments {
        &self.args
    }

    /// Consume the context, returning the accumulated arguments.
    pub fn into_args(self) -> Arguments {
        self.args
    }

    /// Bind one value, returning its placeholder text. In an inline-only
    /// context the value renders as a SQL literal instead and nothing is
    /// recorded.
    pub fn bind(&mut self, value: &Value) -> String {
        if self.inline_only {
            return value.sql_literal();
        }
        let index = self.args.push(value.clone());
        self.style.render(index)
    }

    /// Merge a pre-bound argument container into this resolution.
    ///
    /// # Panics
    ///
    /// Panics in an inline-only context. The fragment's SQL already
    /// embeds caller-written placeholders that this layer never rewrites,
    /// so its arguments cannot be turned into inline literals. Reaching
    /// this is a bug at the construction site, not a runtime condition.
    #[track_caller]
    pub fn bind_all(&mut self, args: &Arguments) {
        if self.inline_only {
            panic!(
                "cannot append {} bound argument(s) to an inline-only resolution; \
                 build the fragment from interpolated values instead of a pre-bound container",
                args.len()
            );
        }
        self.args.extend(args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_style() {
        assert_eq!(PlaceholderStyle::Question.render(3), "?");
        assert_eq!(PlaceholderStyle::Dollar.render(3), "$3");
        assert_eq!(PlaceholderStyle::AtP.render(3), "@p3");
    }

    #[test]
    fn bind_collects_values_in_order() {
        let mut ctx = GenContext::new(PlaceholderStyle::Dollar);
        assert_eq!(ctx.bind(&Value::Integer(1)), "$1");
        assert_eq!(ctx.bind(&Value::Text("x".into())), "$2");
        assert_eq!(ctx.bind(&Value::Null), "$3");

        let args = ctx.into_args();
        assert_eq!(
            args.positional(),
            &[Value::Integer(1), Value::Text("x".into()), Value::Null]
        );
    }

    #[test]
    fn inlined_bind_renders_literals_without_collecting() {
        let mut ctx = GenContext::inlined();
        assert!(!ctx.accepts_arguments());
        assert_eq!(ctx.bind(&Value::Text("it's".into())), "'it''s'");
        assert_eq!(ctx.bind(&Value::Integer(5)), "5");
        assert!(ctx.args().is_empty());
    }

    #[test]
    #[should_panic(expected = "inline-only")]
    fn inlined_context_rejects_prebound_containers() {
        let mut ctx = GenContext::inlined();
        ctx.bind_all(&Arguments::from_values([1]));
    }

    #[test]
    fn bind_all_merges_into_collecting_context() {
        let mut ctx = GenContext::new(PlaceholderStyle::Question);
        ctx.bind(&Value::Integer(1));
        ctx.bind_all(&Arguments::from_values([2, 3]));
        assert_eq!(ctx.args().positional().len(), 3);
    }

    #[test]
    fn count_skips_quoted_runs() {
        assert_eq!(
            PlaceholderStyle::Question.count_in("a = ? AND s = 'it''s ?'"),
            1
        );
        assert_eq!(PlaceholderStyle::Question.count_in(r#""col?" = ?"#), 1);
    }

    #[test]
    fn count_tracks_highest_numbered_index() {
        assert_eq!(
            PlaceholderStyle::Dollar.count_in("a = $1 OR a = $1 OR b = $2"),
            2
        );
        assert_eq!(PlaceholderStyle::AtP.count_in("a = @p1 AND b = @P2"), 2);
        assert_eq!(PlaceholderStyle::Dollar.count_in("no markers"), 0);
    }

    #[test]
    fn check_audits_arity() {
        let args = Arguments::from_values([1, 2]);
        assert!(PlaceholderStyle::Question.check("a = ? AND b = ?", &args).is_ok());

        let err = PlaceholderStyle::Question
            .check("a = ?", &args)
            .unwrap_err();
        assert!(err.is_arity_mismatch());
    }
}
