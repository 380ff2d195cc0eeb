use crate::{CoreError, NewUser, REQUIRED_FIELDS_MESSAGE};

use googletest::prelude::*;

#[test]
fn given_name_and_email_when_validated_then_values_are_trimmed() {
    let user = NewUser::new(Some("  Ada "), Some("\tada@x.com\n")).unwrap();

    assert_that!(user.name(), eq("Ada"));
    assert_that!(user.email(), eq("ada@x.com"));
}

#[test]
fn given_missing_name_when_validated_then_name_field_reported() {
    let result = NewUser::new(None, Some("ada@x.com"));

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_that!(message, eq(REQUIRED_FIELDS_MESSAGE));
            assert_that!(field, some(eq("name")));
        }
        Ok(user) => panic!("expected validation error, got {:?}", user),
    }
}

#[test]
fn given_whitespace_email_when_validated_then_email_field_reported() {
    let result = NewUser::new(Some("Ada"), Some("   "));

    match result {
        Err(CoreError::Validation { field, .. }) => assert_that!(field, some(eq("email"))),
        Ok(user) => panic!("expected validation error, got {:?}", user),
    }
}

#[test]
fn given_both_fields_blank_when_validated_then_no_single_field_reported() {
    let err = NewUser::new(Some(""), None).unwrap_err();

    assert_that!(err.message(), eq(REQUIRED_FIELDS_MESSAGE));
    match err {
        CoreError::Validation { field, .. } => assert_that!(field, none()),
    }
}
