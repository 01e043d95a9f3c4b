//! Example demonstrating placeholder styles and inline-only rendering.
//!
//! Run with:
//!   cargo run --example placeholder_styles -p sqlfrag

use sqlfrag::{Fragment, GenContext, PlaceholderStyle, frag};

fn main() {
    let team = "core";
    let min_score = 7.5;
    let query = frag!("SELECT name FROM players WHERE team = " {team} " AND score >= " {min_score});

    // The fragment is style-agnostic; the consumer decides at resolution
    // time how placeholders render.
    for style in [
        PlaceholderStyle::Question,
        PlaceholderStyle::Dollar,
        PlaceholderStyle::AtP,
    ] {
        let (sql, args) = query.build_with(style);
        println!("{style:?}:");
        println!("  {sql}");
        println!("  ({} argument(s) bound)", args.len());

        // Opt-in audit: placeholders in the text vs values in the container.
        style
            .check(&sql, &args)
            .expect("resolved SQL always agrees with its own arguments");
    }

    // Inline-only resolution renders the values as SQL literals instead,
    // which is handy for logs and error messages.
    let mut display = GenContext::inlined();
    println!("\ninlined for display:\n  {}", query.resolve(&mut display));

    // Identifiers are quoted text, not bindable values.
    let by_column = Fragment::raw("SELECT * FROM t ORDER BY ") + Fragment::identifier("weird \"name\"");
    println!("\nquoted identifier:\n  {}", by_column.build().0);
}
