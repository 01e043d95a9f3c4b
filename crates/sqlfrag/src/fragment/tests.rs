use super::*;
use crate::frag;

#[test]
fn raw_text_resolves_verbatim() {
    let (sql, args) = Fragment::raw("SELECT 1").build();
    assert_eq!(sql, "SELECT 1");
    assert!(args.is_empty());
}

#[test]
fn values_render_as_placeholders_in_order() {
    let f = frag!("a = " {1} " AND b = " {2} " AND c = " {3});
    let (sql, args) = f.build_with(PlaceholderStyle::Dollar);
    assert_eq!(sql, "a = $1 AND b = $2 AND c = $3");
    assert_eq!(
        args.positional(),
        &[Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}

#[test]
fn placeholder_style_is_decided_at_resolution_time() {
    let f = frag!("a = " {1} " AND b = " {2});
    assert_eq!(f.build().0, "a = ? AND b = ?");
    assert_eq!(f.build_with(PlaceholderStyle::Dollar).0, "a = $1 AND b = $2");
    assert_eq!(f.build_with(PlaceholderStyle::AtP).0, "a = @p1 AND b = @p2");
}

#[test]
fn resolving_twice_is_independent() {
    let f = frag!("id = " {7});
    let first = f.build_with(PlaceholderStyle::Dollar);
    let second = f.build_with(PlaceholderStyle::Dollar);
    assert_eq!(first, second);
    assert_eq!(first.0, "id = $1");
}

// ==================== Concatenation ====================

#[test]
fn concatenation_is_associative() {
    let a = Fragment::raw("a = ") + Fragment::value(1);
    let b = Fragment::raw(" AND b = ") + Fragment::value(2);
    let c = Fragment::raw(" AND c = ") + Fragment::value(3);

    let left = (a.clone() + b.clone()) + c.clone();
    let right = a + (b + c);

    assert_eq!(left.build(), right.build());
}

#[test]
fn empty_is_the_concatenation_identity() {
    let f = frag!("WHERE id = " {42});
    assert_eq!((Fragment::empty() + f.clone()).build(), f.build());
    assert_eq!((f.clone() + Fragment::empty()).build(), f.build());
}

#[test]
fn strings_convert_into_fragments() {
    let f = Fragment::raw("SELECT 1") + " UNION SELECT " + Fragment::value(2);
    let (sql, args) = f.build();
    assert_eq!(sql, "SELECT 1 UNION SELECT ?");
    assert_eq!(args.positional().len(), 1);
}

#[test]
fn add_assign_grows_without_mutating_shared_fragments() {
    let base = frag!("WHERE a = " {1});
    let mut grown = base.clone();
    grown += frag!(" AND b = " {2});
    grown += " AND c IS NULL";

    let (sql, args) = grown.build();
    assert_eq!(sql, "WHERE a = ? AND b = ? AND c IS NULL");
    assert_eq!(args.positional().len(), 2);

    // The fragment it grew from is untouched.
    let (base_sql, base_args) = base.build();
    assert_eq!(base_sql, "WHERE a = ?");
    assert_eq!(base_args.positional().len(), 1);
}

#[test]
fn shared_subfragments_bind_once_per_occurrence() {
    let cond = frag!("status = " {"active"});
    let f = cond.clone() + Fragment::raw(" OR ") + cond;
    let (sql, args) = f.build();
    assert_eq!(sql, "status = ? OR status = ?");
    assert_eq!(
        args.positional(),
        &[Value::Text("active".into()), Value::Text("active".into())]
    );
}

// ==================== Join ====================

#[test]
fn join_of_no_elements_is_empty() {
    let f = Fragment::join(std::iter::empty::<Fragment>(), ", ");
    assert_eq!(f.build(), (String::new(), Arguments::new()));
}

#[test]
fn join_of_one_element_has_no_separator() {
    let f = Fragment::join([Fragment::raw("a")], ",");
    assert_eq!(f.build().0, "a");
}

#[test]
fn join_places_separator_between_consecutive_elements() {
    let f = Fragment::join(
        [Fragment::raw("a"), Fragment::raw("b"), Fragment::raw("c")],
        ", ",
    );
    assert_eq!(f.build().0, "a, b, c");
}

#[test]
fn join_keeps_arguments_in_element_order() {
    let elements = (1..=3).map(Fragment::value);
    let f = Fragment::raw("id IN (") + Fragment::join(elements, ", ") + Fragment::raw(")");
    let (sql, args) = f.build_with(PlaceholderStyle::Dollar);
    assert_eq!(sql, "id IN ($1, $2, $3)");
    assert_eq!(
        args.positional(),
        &[Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}

#[test]
fn join_accepts_single_pass_iterators() {
    let mut calls = 0;
    let elements = std::iter::from_fn(|| {
        calls += 1;
        (calls <= 2).then(|| Fragment::value(calls))
    });

    let f = Fragment::join(elements, " + ");
    let (sql, args) = f.build();
    assert_eq!(sql, "? + ?");
    assert_eq!(args.positional().len(), 2);
}

// ==================== Text transforms ====================

#[test]
fn map_sql_rewrites_text_only() {
    let f = Fragment::raw_with("where x = ?", Arguments::from_values([5]));
    let mapped = f.map_sql(|sql| sql.to_uppercase());
    let (sql, args) = mapped.build();
    assert_eq!(sql, "WHERE X = ?");
    assert_eq!(args.positional(), &[Value::Integer(5)]);
}

#[test]
fn map_sql_composes_with_concatenation() {
    let inner = frag!("select " {1});
    let f = inner.map_sql(|sql| sql.to_uppercase()) + frag!(" where b = " {2});
    let (sql, args) = f.build_with(PlaceholderStyle::Dollar);
    assert_eq!(sql, "SELECT $1 where b = $2");
    assert_eq!(args.positional().len(), 2);
}

#[test]
fn map_sql_nests() {
    let f = Fragment::raw("a")
        .map_sql(|sql| format!("({sql})"))
        .map_sql(|sql| format!("NOT {sql}"));
    assert_eq!(f.build().0, "NOT (a)");
}

// ==================== Pre-bound text ====================

#[test]
fn prebound_and_interpolated_arguments_keep_walk_order() {
    let f = Fragment::raw_with("x = ? AND ", Arguments::from_values(["pre"]))
        + frag!("y = " {"post"});
    let (sql, args) = f.build();
    assert_eq!(sql, "x = ? AND y = ?");
    assert_eq!(
        args.positional(),
        &[Value::Text("pre".into()), Value::Text("post".into())]
    );
}

#[test]
fn named_arguments_merge_through_resolution() {
    let f = Fragment::raw_with("id = :id", Arguments::from_named([("id", 3)]))
        + Fragment::raw(" AND ")
        + Fragment::raw_with("name = :name", Arguments::from_named([("name", "ada")]));
    let (sql, args) = f.build();
    assert_eq!(sql, "id = :id AND name = :name");
    assert_eq!(args.named().len(), 2);
    assert_eq!(args.get_named("id"), Some(&Value::Integer(3)));
    assert_eq!(args.get_named("name"), Some(&Value::Text("ada".into())));
}

#[test]
fn raw_constructors_never_rewrite_text() {
    // A deliberate mismatch goes through untouched; the opt-in audit is
    // what reports it.
    let args = Arguments::from_values([1]);
    let f = Fragment::raw_with("a = ? AND b = ?", args);
    let (sql, out) = f.build();
    assert_eq!(sql, "a = ? AND b = ?");
    assert_eq!(out.positional().len(), 1);
    assert!(
        PlaceholderStyle::Question
            .check(&sql, &out)
            .unwrap_err()
            .is_arity_mismatch()
    );
}

// ==================== Inline-only resolution ====================

#[test]
fn inline_only_resolution_renders_value_literals() {
    let f = frag!("name = " {"O'Brien"} " AND age > " {21});
    let mut ctx = GenContext::inlined();
    assert_eq!(f.resolve(&mut ctx), "name = 'O''Brien' AND age > 21");
    assert!(ctx.args().is_empty());
}

#[test]
fn pure_text_is_fine_under_inline_only_resolution() {
    let f = Fragment::raw("SELECT 1") + Fragment::identifier("t") + Fragment::empty();
    let mut ctx = GenContext::inlined();
    assert_eq!(f.resolve(&mut ctx), r#"SELECT 1"t""#);
}

#[test]
#[should_panic(expected = "inline-only")]
fn prebound_container_panics_under_inline_only_resolution() {
    let f = Fragment::raw_with("WHERE id = ?", Arguments::from_values([42]));
    let mut ctx = GenContext::inlined();
    f.resolve(&mut ctx);
}

// ==================== Interpolation and macro ====================

#[test]
fn empty_macro_invocation_is_the_empty_fragment() {
    assert_eq!(frag!().build(), (String::new(), Arguments::new()));
}

#[test]
fn interpolation_builder_matches_macro_output() {
    let mut pieces = Interpolation::new();
    pieces.push_text("UPDATE t SET name = ");
    pieces.push_value("x");
    pieces.push_text(" WHERE id = ");
    pieces.push_value(9);
    let built = pieces.into_fragment();

    let via_macro = frag!("UPDATE t SET name = " {"x"} " WHERE id = " {9});
    assert_eq!(built.build(), via_macro.build());
}

#[test]
fn interpolation_embeds_subfragments_in_order() {
    let cond = frag!("id = " {1});

    let mut pieces = Interpolation::new();
    pieces.push_text("SELECT * FROM t WHERE ");
    pieces.push_fragment(cond);
    pieces.push_text(" LIMIT ");
    pieces.push_value(10);

    let (sql, args) = pieces.into_fragment().build_with(PlaceholderStyle::Dollar);
    assert_eq!(sql, "SELECT * FROM t WHERE id = $1 LIMIT $2");
    assert_eq!(args.positional().len(), 2);
}

#[test]
fn macro_accepts_adjacent_value_pieces() {
    let f = frag!("POINT(" {1.5} {2.5} ")");
    let (sql, args) = f.build();
    assert_eq!(sql, "POINT(??)");
    assert_eq!(args.positional(), &[Value::Real(1.5), Value::Real(2.5)]);
}

// ==================== Misc ====================

#[test]
fn identifier_fragments_quote_names() {
    let f = Fragment::raw("SELECT * FROM ") + Fragment::identifier("user table");
    let (sql, args) = f.build();
    assert_eq!(sql, r#"SELECT * FROM "user table""#);
    assert!(args.is_empty());
}

#[test]
fn null_values_bind_like_any_other() {
    let f = frag!("deleted_at = " {None::<i64>});
    let (sql, args) = f.build();
    assert_eq!(sql, "deleted_at = ?");
    assert_eq!(args.positional(), &[Value::Null]);
}

#[test]
fn fragments_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Fragment>();
    assert_send_sync::<Arguments>();
    assert_send_sync::<GenContext>();
}

#[test]
fn debug_output_names_the_tree_shape() {
    let f = (Fragment::raw("a = ") + Fragment::value(1)).map_sql(|s| s);
    let debug = format!("{f:?}");
    assert!(debug.contains("Transform"), "debug was: {debug}");
    assert!(debug.contains("Concat"), "debug was: {debug}");
    assert!(debug.contains("<fn>"), "debug was: {debug}");
}
