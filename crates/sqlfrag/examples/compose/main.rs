//! Example demonstrating sqlfrag's deferred composition.
//!
//! Run with:
//!   cargo run --example compose -p sqlfrag

use sqlfrag::{Fragment, frag};

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    roles_any_of: Vec<String>,
    include_deleted: bool,
    limit: i64,
}

fn build_list_users(filters: &Filters) -> Fragment {
    let mut query = Fragment::raw("SELECT id, name, status, role FROM users");
    let mut conditions = Vec::new();

    if let Some(status) = &filters.status {
        conditions.push(frag!("status = " {status.clone()}));
    }

    if let Some(search) = &filters.search {
        conditions.push(frag!("name LIKE " {format!("%{search}%")}));
    }

    if !filters.roles_any_of.is_empty() {
        let roles = filters
            .roles_any_of
            .iter()
            .map(|role| Fragment::value(role.clone()));
        conditions.push(Fragment::raw("role IN (") + Fragment::join(roles, ", ") + Fragment::raw(")"));
    }

    if !filters.include_deleted {
        conditions.push(Fragment::raw("deleted_at IS NULL"));
    }

    if !conditions.is_empty() {
        query += Fragment::raw(" WHERE ");
        query += Fragment::join(conditions, " AND ");
    }

    query += frag!(" ORDER BY name LIMIT " {filters.limit});
    query
}

fn main() {
    let filters = Filters {
        status: Some("active".to_string()),
        search: Some("a".to_string()),
        roles_any_of: vec!["admin".to_string(), "owner".to_string()],
        include_deleted: false,
        limit: 10,
    };

    let query = build_list_users(&filters);

    // One walk produces SQL and arguments together.
    let (sql, args) = query.build();
    println!("built sql:\n{sql}\n");
    println!("arguments = {}", args.len());
    for (i, value) in args.positional().iter().enumerate() {
        println!("  ${} = {value:?}", i + 1);
    }

    // The same fragment, reshaped after the fact: wrap it as a subquery.
    let counted = query.map_sql(|sql| format!("SELECT COUNT(*) FROM ({sql}) AS listed"));
    let (count_sql, count_args) = counted.build();
    println!("\ncount sql:\n{count_sql}");
    println!("arguments carried over = {}", count_args.len());
}
