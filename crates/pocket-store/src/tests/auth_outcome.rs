use crate::{AuthError, AuthOutcome, AuthResult};

use googletest::prelude::*;

#[test]
fn given_ok_result_when_converted_then_success_without_error() {
    let result: AuthResult<()> = Ok(());

    let outcome = AuthOutcome::from(&result);

    assert_that!(outcome.success, eq(true));
    assert_that!(outcome.error, none());
}

#[test]
fn given_mismatch_result_when_converted_then_failure_with_reason() {
    let result: AuthResult<()> = Err(AuthError::credential_mismatch());

    let outcome = AuthOutcome::from(&result);

    assert_that!(outcome.success, eq(false));
    assert_that!(outcome.error.as_deref(), some(eq("Incorrect credentials")));
}

#[test]
fn given_success_when_serialized_then_error_field_omitted() {
    let json = serde_json::to_string(&AuthOutcome::success()).unwrap();

    assert_that!(json.as_str(), eq(r#"{"success":true}"#));
}

#[test]
fn given_failure_when_serialized_then_error_field_present() {
    let json = serde_json::to_string(&AuthOutcome::failure("disk full")).unwrap();

    assert_that!(json.as_str(), eq(r#"{"success":false,"error":"disk full"}"#));
}
