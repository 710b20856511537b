use crate::tests::fakes::{Fixture, RecordingHasher};
use crate::{CoreError, PersonRegistration};

use googletest::prelude::*;

fn registration(name: &str, email: &str, password: &str) -> PersonRegistration {
    PersonRegistration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn given_valid_registration_when_create_then_returns_person_with_id() {
    // Given
    let fixture = Fixture::new();

    // When
    let person = fixture
        .service
        .create(registration("caio", "caio@x.com", "1254"))
        .await
        .unwrap();

    // Then
    assert_that!(person.id, gt(0));
    assert_that!(person.name, eq("caio"));
    assert_that!(person.email, eq("caio@x.com"));
    assert_that!(person.password_hash, not(eq("1254")));
    assert_that!(person.picture, none());
}

#[tokio::test]
async fn given_registration_when_create_then_hash_is_hasher_output_over_plaintext() {
    // Given
    let fixture = Fixture::new();

    // When
    let person = fixture
        .service
        .create(registration("Ana", "ana@x.com", "s3cret!"))
        .await
        .unwrap();

    // Then
    assert_eq!(fixture.hasher.calls(), vec!["s3cret!".to_string()]);
    assert_that!(person.password_hash, eq(&RecordingHasher::digest("s3cret!")));

    let stored = fixture.repository.get(person.id).unwrap();
    assert_that!(stored.password_hash, eq(&person.password_hash));
    assert_that!(stored.password_hash, not(eq("s3cret!")));
}

#[tokio::test]
async fn given_existing_email_when_create_then_conflict() {
    // Given
    let fixture = Fixture::new();
    let first = fixture
        .service
        .create(registration("caio", "caio@x.com", "1254"))
        .await;

    // When
    let second = fixture
        .service
        .create(registration("other caio", "caio@x.com", "99999"))
        .await;

    // Then
    assert_that!(first, ok(anything()));
    assert!(matches!(second, Err(CoreError::Conflict { .. })));
    let err = second.unwrap_err();
    assert_that!(err.to_string(), contains_substring("email already registered"));
    assert_that!(err.error_code(), eq("CONFLICT"));
}

#[tokio::test]
async fn given_backend_failure_when_create_then_error_propagates_untranslated() {
    // Given
    let fixture = Fixture::new();
    fixture.repository.fail_inserts();

    // When
    let result = fixture
        .service
        .create(registration("caio", "caio@x.com", "1254"))
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::Repository { .. })));
    assert_that!(result.unwrap_err().error_code(), eq("INTERNAL_ERROR"));
}
