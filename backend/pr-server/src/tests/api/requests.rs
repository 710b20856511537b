use crate::{ApiError, CreatePersonRequest, UpdatePersonRequest};

use googletest::prelude::*;

#[test]
fn given_valid_create_request_when_validated_then_registration_keeps_plaintext_for_hashing() {
    let request = CreatePersonRequest {
        name: "caio".to_string(),
        email: "caio@x.com".to_string(),
        password: "senha123".to_string(),
    };

    let registration = request.validate().unwrap();

    assert_that!(registration.name, eq("caio"));
    assert_that!(registration.email, eq("caio@x.com"));
    assert_that!(registration.password, eq("senha123"));
}

#[test]
fn given_create_request_with_bad_email_when_validated_then_fails_on_email() {
    let request = CreatePersonRequest {
        name: "Nome da Pessoa".to_string(),
        email: "emailinvalido".to_string(),
        password: "senha123".to_string(),
    };

    match request.validate() {
        Err(ApiError::Validation { field, .. }) => assert_that!(field, some(eq("email"))),
        other => panic!("expected email validation error, got {other:?}"),
    }
}

#[test]
fn given_update_with_only_name_when_validated_then_password_untouched() {
    let request = UpdatePersonRequest {
        name: Some("Luiz".to_string()),
        password: None,
    };

    let changes = request.validate().unwrap();

    assert_that!(changes.name, some(eq("Luiz")));
    assert_that!(changes.password, none());
}

#[test]
fn given_update_with_short_password_when_validated_then_fails_on_password() {
    let request = UpdatePersonRequest {
        name: None,
        password: Some("123".to_string()),
    };

    match request.validate() {
        Err(ApiError::Validation { field, .. }) => assert_that!(field, some(eq("password"))),
        other => panic!("expected password validation error, got {other:?}"),
    }
}

#[test]
fn given_empty_update_when_validated_then_bad_request() {
    let result = UpdatePersonRequest::default().validate();

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn given_update_body_with_email_when_deserialized_then_rejected() {
    let result: Result<UpdatePersonRequest, _> =
        serde_json::from_str(r#"{"email": "other@x.com"}"#);

    assert!(result.is_err());
}
