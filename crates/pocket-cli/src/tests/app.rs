use crate::app::{INVALID_CREDENTIALS_ALERT, SessionView, StatusView};
use crate::tests::{memory_app, read_only_app};
use crate::{Commands, OutputBody};

use pocket_store::{AuthOutcome, INCORRECT_CREDENTIALS, KeyValueStore};

use googletest::prelude::*;

fn signup(name: &str, email: &str, password: &str) -> Commands {
    Commands::Signup {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn login(email: &str, password: &str) -> Commands {
    Commands::Login {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn given_fresh_install_when_started_then_status_logged_out() {
    let app = memory_app();
    app.start().await;

    let output = app.execute(Commands::Status).await;

    assert!(output.success);
    assert_that!(
        output.body,
        eq(&OutputBody::Status(StatusView {
            state: "logged_out"
        }))
    );
}

#[tokio::test]
async fn given_valid_signup_when_executed_then_logged_in() {
    let app = memory_app();
    app.start().await;

    let output = app
        .execute(signup("Alice", "Alice@Example.com", "secret1"))
        .await;

    assert!(output.success);
    assert_that!(output.body, eq(&OutputBody::Outcome(AuthOutcome::success())));
    assert_that!(output.alert, none());
    assert!(app.sessions().state().is_logged_in());
}

#[tokio::test]
async fn given_invalid_signup_form_when_executed_then_store_untouched() {
    let app = memory_app();
    app.start().await;

    let output = app.execute(signup("Alice", "not-an-email", "secret1")).await;

    assert!(!output.success);
    assert_that!(
        output.body,
        eq(&OutputBody::Outcome(AuthOutcome::failure(
            "Please enter a valid email"
        )))
    );
    assert!(app.sessions().storage().is_empty().await);
}

#[tokio::test]
async fn given_signed_up_user_when_whoami_then_session_without_password() {
    let app = memory_app();
    app.start().await;
    app.execute(signup("Alice", "alice@example.com", "secret1"))
        .await;

    let output = app.execute(Commands::Whoami).await;

    assert!(output.success);
    assert_that!(
        output.body,
        eq(&OutputBody::Session(SessionView {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }))
    );
    let json = serde_json::to_string(&output.body).unwrap();
    assert!(!json.contains("secret1"));
}

#[tokio::test]
async fn given_logged_out_when_whoami_then_failure() {
    let app = memory_app();
    app.start().await;

    let output = app.execute(Commands::Whoami).await;

    assert!(!output.success);
    assert_that!(
        output.body,
        eq(&OutputBody::Outcome(AuthOutcome::failure("Not logged in")))
    );
}

#[tokio::test]
async fn given_wrong_password_when_login_then_alert_and_masked_error() {
    let app = memory_app();
    app.start().await;
    app.execute(signup("Alice", "alice@example.com", "secret1"))
        .await;
    app.execute(Commands::Logout).await;

    let output = app.execute(login("alice@example.com", "wrong-pass")).await;

    assert!(!output.success);
    assert_that!(output.alert, some(eq(INVALID_CREDENTIALS_ALERT)));
    assert_that!(output.hint, none());
    assert_that!(
        output.body,
        eq(&OutputBody::Outcome(AuthOutcome::failure(
            INCORRECT_CREDENTIALS
        )))
    );
    assert!(!app.sessions().state().is_logged_in());
}

#[tokio::test]
async fn given_no_registration_when_login_then_same_alert_as_wrong_password() {
    let app = memory_app();
    app.start().await;

    let output = app.execute(login("nobody@example.com", "secret1")).await;

    assert!(!output.success);
    assert_that!(output.alert, some(eq(INVALID_CREDENTIALS_ALERT)));
}

#[tokio::test]
async fn given_invalid_login_form_when_executed_then_no_alert() {
    let app = memory_app();
    app.start().await;

    let output = app.execute(login("alice@example.com", "abc")).await;

    assert!(!output.success);
    assert_that!(output.alert, none());
    assert_that!(
        output.body,
        eq(&OutputBody::Outcome(AuthOutcome::failure(
            "Password must be at least 6 characters"
        )))
    );
}

#[tokio::test]
async fn given_padded_email_when_login_then_matches_registration() {
    let app = memory_app();
    app.start().await;
    app.execute(signup("Alice", "alice@example.com", "secret1"))
        .await;
    app.execute(Commands::Logout).await;

    let output = app.execute(login("  ALICE@example.com ", "secret1")).await;

    assert!(output.success);
    assert!(app.sessions().state().is_logged_in());
}

#[tokio::test]
async fn given_logged_in_when_logout_then_registration_survives() {
    let app = memory_app();
    app.start().await;
    app.execute(signup("Alice", "alice@example.com", "secret1"))
        .await;

    let output = app.execute(Commands::Logout).await;

    assert!(output.success);
    assert_that!(
        app.execute(Commands::Status).await.body,
        eq(&OutputBody::Status(StatusView {
            state: "logged_out"
        }))
    );
    let registered = app
        .sessions()
        .storage()
        .get(pocket_core::REGISTERED_USER_KEY)
        .await
        .unwrap();
    assert_that!(registered, some(anything()));
}

#[tokio::test]
async fn given_storage_rejects_writes_when_signup_then_hint_and_clean_message() {
    let app = read_only_app();
    app.start().await;

    let output = app
        .execute(signup("Alice", "alice@example.com", "secret1"))
        .await;

    assert!(!output.success);
    assert_that!(output.alert, none());
    assert_that!(output.hint, some(anything()));
    assert!(!output.hint.unwrap_or_default().is_empty());
    let json = serde_json::to_string(&output.body).unwrap();
    assert!(json.contains("Failed to write record at registeredUser"), "{json}");
    assert!(!json.contains(".rs:"), "{json}");
}

#[tokio::test]
async fn given_storage_rejects_removal_when_logout_then_hint() {
    let app = read_only_app();
    app.start().await;

    let output = app.execute(Commands::Logout).await;

    assert!(!output.success);
    assert_that!(output.hint, some(anything()));
}

#[test]
fn given_output_bodies_when_serialized_then_flat_json() {
    let outcome = serde_json::to_string(&OutputBody::Outcome(AuthOutcome::success())).unwrap();
    let status = serde_json::to_string(&OutputBody::Status(StatusView {
        state: "logged_in",
    }))
    .unwrap();

    assert_eq!(outcome, r#"{"success":true}"#);
    assert_eq!(status, r#"{"state":"logged_in"}"#);
}
