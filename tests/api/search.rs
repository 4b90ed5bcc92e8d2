use paginate::{
    errors::SearchError,
    pagination::PaginationQuery,
    search::{Header, Input, SortDirection, Table},
};

use crate::helpers::test_settings;

fn users_table() -> Table {
    let mut table = Table::new(vec![
        Header {
            name: "name".into(),
            input: Input {
                visible: true,
                placeholder: Some("Search name".into()),
                can_search: true,
                search_columns: vec!["first_name".into(), "last_name".into()],
                search_pattern: "->".into(),
                ..Input::default()
            },
        },
        Header {
            name: "email".into(),
            input: Input {
                visible: true,
                can_search: true,
                search_columns: vec!["email".into()],
                search_pattern: "-".into(),
                ..Input::default()
            },
        },
        Header {
            name: "created".into(),
            input: Input::default(),
        },
    ]);
    table.order_by_col = Some("created_at".into());
    table.order_by_sort = SortDirection::Desc;
    table
}

#[test]
fn request_params_drive_the_select() {
    let mut table = users_table();
    table.params.insert("name".into(), "al".into());
    table.params.insert("created".into(), "2024".into());
    table.apply_params();

    let query = PaginationQuery::new(3, Some(20));
    let settings = test_settings();
    let select = table.query_select(
        "users",
        query.per_page(&settings),
        query.page(),
    );
    let (sql, args) = select.to_sql().unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM users WHERE (first_name LIKE $1 OR last_name LIKE $2) \
         ORDER BY created_at DESC LIMIT 20 OFFSET 40"
    );
    assert_eq!(args, vec!["al%", "al%"]);
}

#[test]
fn count_and_select_share_the_table() {
    let table = users_table();
    let (count, _) = table.query_count("users").to_sql().unwrap();
    let (select, args) = table.query_select("users", 15, 1).to_sql().unwrap();

    assert_eq!(count, "SELECT count(*) FROM users");
    assert_eq!(select, "SELECT * FROM users ORDER BY created_at DESC LIMIT 15 OFFSET 0");
    assert!(args.is_empty());
}

#[test]
fn malformed_order_column_is_reported() {
    let mut table = users_table();
    table.order_by_col = Some("created_at; --".into());

    let result = table.query_select("users", 15, 1).to_sql();
    assert_eq!(
        result,
        Err(SearchError::InvalidIdentifier("created_at; --".into()))
    );
}

#[test]
fn select_is_handed_over_as_a_sqlx_builder() {
    let mut table = users_table();
    table.params.insert("email".into(), "al@example.com".into());
    table.apply_params();

    let builder = table.query_select("users", 15, 2).build().unwrap();
    assert_eq!(
        builder.sql(),
        "SELECT * FROM users WHERE (email = $1) ORDER BY created_at DESC LIMIT 15 OFFSET 15"
    );
}
