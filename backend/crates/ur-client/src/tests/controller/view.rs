use crate::{ListView, UserRow};

use ur_core::User;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
    }
}

#[test]
fn test_ready_view_rows_keep_order() {
    let users = vec![user(1, "Ada", "ada@x.com"), user(2, "Bob", "bob@x.com")];

    let ListView::Ready { header, rows } = ListView::ready(&users) else {
        panic!("expected Ready view");
    };

    assert_that!(header, eq("2 users registered"));
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_row_shows_added_timestamp() {
    let row = UserRow::from(&user(7, "Ada", "ada@x.com"));

    assert_that!(row.added, eq("2026-01-02T03:04:05Z"));
}

#[test]
fn test_rendered_row_has_remove_affordance() {
    let rendered = ListView::ready(&[user(1, "Ada", "ada@x.com")]).to_string();

    assert_that!(rendered, contains_substring("[1] Ada <ada@x.com>  [x]"));
    assert_that!(rendered, contains_substring("Added: 2026-01-02T03:04:05Z"));
}
