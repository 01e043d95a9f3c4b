//! The [`frag!`](crate::frag) interpolation macro.

/// Build a [`Fragment`](crate::Fragment) from interleaved literal text
/// and `{value}` pieces.
///
/// String-literal tokens append as SQL text; brace-wrapped expressions
/// bind as arguments, in source order. A value piece never splices into
/// the text, so every interpolated Rust value is injection-safe.
///
/// # Example
///
/// ```
/// use sqlfrag::frag;
///
/// let name = "O'Brien";
/// let query = frag!("SELECT id FROM users WHERE name = " {name} " LIMIT 1");
///
/// let (sql, args) = query.build();
/// assert_eq!(sql, "SELECT id FROM users WHERE name = ? LIMIT 1");
/// assert_eq!(args.positional().len(), 1);
/// ```
#[macro_export]
macro_rules! frag {
    () => {
        $crate::Fragment::empty()
    };
    ($($piece:tt)+) => {{
        let mut pieces = $crate::Interpolation::new();
        $($crate::__frag_piece!(pieces, $piece);)+
        $crate::Fragment::from(pieces)
    }};
}

/// Routes one `frag!` piece; not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __frag_piece {
    ($pieces:ident, { $value:expr }) => {
        $pieces.push_value($value);
    };
    ($pieces:ident, $text:literal) => {
        $pieces.push_text($text);
    };
}
