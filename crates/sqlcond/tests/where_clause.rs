//! End-to-end WHERE clause assembly.
//!
//! The `*_against_postgres` tests run only when `DATABASE_URL` is set.

use sqlcond::prelude::*;
use sqlcond::{CondError, PatternValue, interpolate, placeholder_count};

async fn try_connect() -> Option<tokio_postgres::Client> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let (client, connection) = tokio_postgres::connect(&database_url, tokio_postgres::NoTls)
        .await
        .expect("Failed to connect to DATABASE_URL with NoTls");
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("tokio-postgres connection error: {e}");
        }
    });
    Some(client)
}

/// Search form where every field is optional.
struct UserSearch {
    status: Option<&'static str>,
    name: String,
    team_ids: Vec<i64>,
    min_age: Option<i32>,
    max_age: Option<i32>,
    roles: Vec<&'static str>,
}

fn user_filter(search: &UserSearch) -> List {
    clause![
        eq("status", search.status),
        like("name", search.name.clone()),
        in_list("team_id", search.team_ids.clone()),
        and![gte("age", search.min_age), lte("age", search.max_age)],
        or_line![or_eq("role", search.roles.clone()), is_null("banned_at")],
    ]
}

#[test]
fn full_search_renders_every_filter() {
    let search = UserSearch {
        status: Some("active"),
        name: "ali".to_string(),
        team_ids: vec![7, 9],
        min_age: Some(18),
        max_age: Some(65),
        roles: vec!["admin", "owner"],
    };

    let compiled = user_filter(&search).compile(&Dialect::DOLLAR);
    assert_eq!(
        compiled.sql(),
        "status = $1 AND name LIKE $2 AND team_id IN ($3, $4)\n  \
         AND age >= $5 AND age <= $6\n  \
         AND ((role = $7 OR role = $8) OR banned_at IS NULL)"
    );
    assert_eq!(compiled.args()[1], Value::from("%ali%"));
    assert_eq!(compiled.args().len(), 8);
}

#[test]
fn empty_search_keeps_only_unconditional_filters() {
    let search = UserSearch {
        status: None,
        name: String::new(),
        team_ids: Vec::new(),
        min_age: None,
        max_age: None,
        roles: Vec::new(),
    };

    let fragment = user_filter(&search).build();
    assert_eq!(fragment.sql(), "banned_at IS NULL");
    assert!(fragment.args().is_empty());
}

#[test]
fn partial_search_drops_missing_filters() {
    let search = UserSearch {
        status: None,
        name: String::new(),
        team_ids: vec![3],
        min_age: Some(21),
        max_age: None,
        roles: vec!["admin"],
    };

    let fragment = user_filter(&search).build();
    assert_eq!(
        fragment.sql(),
        "team_id IN (?)\n  AND age >= ?\n  AND (role = ? OR banned_at IS NULL)"
    );
    assert_eq!(placeholder_count(fragment.sql()), fragment.args().len());
}

#[test]
fn every_dialect_numbers_in_order() {
    let filter = and![eq("a", 1), between("b", 2, 3), ne("c", 4)];

    assert_eq!(
        filter.compile(&Dialect::QUESTION).sql(),
        "a = ? AND b BETWEEN ? AND ? AND c <> ?"
    );
    assert_eq!(
        filter.compile(&Dialect::DOLLAR).sql(),
        "a = $1 AND b BETWEEN $2 AND $3 AND c <> $4"
    );
    assert_eq!(
        filter.compile(&Dialect::COLON).sql(),
        "a = :1 AND b BETWEEN :2 AND :3 AND c <> :4"
    );
    assert_eq!(
        filter.compile(&Dialect::AT_P).sql(),
        "a = @p1 AND b BETWEEN @p2 AND @p3 AND c <> @p4"
    );
}

#[test]
fn escaped_placeholder_survives_compile() {
    let filter = and![
        Fragment::template("tags ?? ?", ["beta"]).unwrap(),
        eq("id", 5),
    ];
    let compiled = filter.compile(&Dialect::DOLLAR);
    assert_eq!(compiled.sql(), "tags ? $1 AND id = $2");
    assert_eq!(filter.debug(), "tags ? 'beta' AND id = 5");
}

#[test]
fn subquery_arguments_are_spliced_in_order() {
    let banned =
        Fragment::template("(SELECT user_id FROM bans WHERE reason = ?)", ["spam"]).unwrap();
    let filter = and![
        eq("org_id", 1),
        Condition::not_in_query("id", banned),
        eq("status", "active"),
    ];

    let compiled = filter.compile(&Dialect::DOLLAR);
    assert_eq!(
        compiled.sql(),
        "org_id = $1 AND id NOT IN (SELECT user_id FROM bans WHERE reason = $2) AND status = $3"
    );
    assert_eq!(
        compiled.args(),
        &[Value::from(1), Value::from("spam"), Value::from("active")]
    );
}

#[test]
fn omission_flags_compose() {
    let page_filter = and![
        eq("archived", false).omit_if_default(),
        eq("owner_id", 0).omit_if_default(),
        gt("score", 10).omit(true),
        eq("kind", "post").omit_if(|operand| operand.as_scalar() == Some(&Value::from("post"))),
        lt("rank", 100),
    ];
    assert_eq!(page_filter.debug(), "rank < 100");
}

#[test]
fn custom_wildcard_pattern() {
    let cond = Condition::new(
        "path",
        Operator::Like,
        PatternValue::with_wildcard("docs*", '*'),
    )
    .unwrap();
    assert_eq!(cond.debug(), "path LIKE 'docs*'");
}

#[test]
fn operand_mismatch_is_rejected() {
    let err = Condition::new("id", Operator::In, Operand::scalar(1)).unwrap_err();
    assert!(err.is_operand_mismatch());

    let err = Condition::new("", Operator::Eq, Operand::scalar(1)).unwrap_err();
    assert_eq!(err, CondError::EmptyColumn);
}

#[test]
fn template_arity_is_checked() {
    let err = Fragment::template("a = ? AND b = ?", [1]).unwrap_err();
    assert!(err.is_param_mismatch());
}

#[test]
fn debug_mismatch_is_reported_inline() {
    assert_eq!(
        interpolate("a = ?", &[]),
        "/* DEBUGGER WARNING: Mismatch between 1 placeholders and 0 arguments */ a = ?"
    );
}

#[tokio::test]
async fn filter_rows_against_postgres() {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let filter = clause![
        gte("n", 2),
        or_line![eq("label", "b"), eq("label", "d")],
        eq("label", None::<&str>),
    ];
    let compiled = filter.compile(&Dialect::DOLLAR);
    let sql = format!(
        "SELECT n FROM (VALUES (1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')) AS t(n, label) WHERE {} ORDER BY n",
        compiled.sql()
    );

    let rows = client.query(&sql, &compiled.params_ref()).await.unwrap();
    let ns: Vec<i32> = rows.iter().map(|r| r.get(0)).collect();
    assert_eq!(ns, vec![2, 4]);
}

#[tokio::test]
async fn int_narrowing_against_postgres() {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let compiled = eq("n", i64::from(i32::MAX) + 1).compile(&Dialect::DOLLAR);
    let sql = format!("SELECT n FROM (VALUES (1::int4)) AS t(n) WHERE {}", compiled.sql());
    let err = client.query(&sql, &compiled.params_ref()).await.unwrap_err();
    assert!(err.to_string().contains("error serializing parameter"));
}
