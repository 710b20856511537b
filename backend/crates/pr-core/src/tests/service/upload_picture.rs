use crate::tests::fakes::{Fixture, TEST_MIN_PICTURE_BYTES};
use crate::{Caller, CoreError, PictureUpload};

use googletest::prelude::*;

fn upload_of(size: usize) -> PictureUpload {
    PictureUpload {
        data: vec![0x89u8; size].into(),
        original_name: Some("holiday photo.jpeg".to_string()),
        content_type: Some("image/jpeg".to_string()),
    }
}

#[tokio::test]
async fn given_payload_below_threshold_when_upload_then_bad_request_without_side_effects() {
    // Given
    let fixture = Fixture::new();
    let person = fixture.repository.seed("caio", "caio@x.com");

    // When
    let result = fixture
        .service
        .upload_picture(upload_of(500), &Caller::new(person.id))
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::BadRequest { .. })));
    assert_that!(fixture.blobs.writes(), is_empty());
    assert_that!(fixture.repository.writes(), eq(0));
}

#[tokio::test]
async fn given_undersized_payload_and_unknown_caller_when_upload_then_size_is_checked_first() {
    let fixture = Fixture::new();

    let result = fixture
        .service
        .upload_picture(upload_of(10), &Caller::new(99))
        .await;

    assert!(matches!(result, Err(CoreError::BadRequest { .. })));
}

#[tokio::test]
async fn given_valid_payload_when_upload_then_written_once_under_id_derived_name() {
    // Given
    let fixture = Fixture::new();
    fixture.repository.seed("first", "first@x.com");
    let person = fixture.repository.seed("caio", "caio@x.com");
    let size = TEST_MIN_PICTURE_BYTES as usize + 24;

    // When
    let updated = fixture
        .service
        .upload_picture(upload_of(size), &Caller::new(person.id))
        .await
        .unwrap();

    // Then
    let expected_name = format!("{}.png", person.id);
    assert_eq!(fixture.blobs.writes(), vec![(expected_name.clone(), size)]);
    assert_that!(updated.picture, some(eq(&expected_name)));
    assert_that!(
        fixture.repository.get(person.id).unwrap().picture,
        some(eq(&expected_name))
    );
}

#[tokio::test]
async fn given_payload_exactly_at_threshold_when_upload_then_accepted() {
    let fixture = Fixture::new();
    let person = fixture.repository.seed("caio", "caio@x.com");

    let result = fixture
        .service
        .upload_picture(
            upload_of(TEST_MIN_PICTURE_BYTES as usize),
            &Caller::new(person.id),
        )
        .await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_second_upload_when_upload_then_same_name_is_overwritten() {
    let fixture = Fixture::new();
    let person = fixture.repository.seed("caio", "caio@x.com");
    let caller = Caller::new(person.id);

    fixture
        .service
        .upload_picture(upload_of(2000), &caller)
        .await
        .unwrap();
    let updated = fixture
        .service
        .upload_picture(upload_of(3000), &caller)
        .await
        .unwrap();

    let names: Vec<String> = fixture.blobs.writes().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["1.png".to_string(), "1.png".to_string()]);
    assert_that!(updated.picture, some(eq("1.png")));
}

#[tokio::test]
async fn given_caller_without_record_when_upload_then_not_found_and_nothing_written() {
    let fixture = Fixture::new();

    let result = fixture
        .service
        .upload_picture(upload_of(4096), &Caller::new(12))
        .await;

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
    assert_that!(fixture.blobs.writes(), is_empty());
}

#[tokio::test]
async fn given_failing_blob_store_when_upload_then_storage_error_and_record_untouched() {
    // Given
    let fixture = Fixture::new();
    let person = fixture.repository.seed("caio", "caio@x.com");
    fixture.blobs.fail_writes();

    // When
    let result = fixture
        .service
        .upload_picture(upload_of(4096), &Caller::new(person.id))
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::Storage { .. })));
    assert_that!(fixture.repository.writes(), eq(0));
    assert_that!(fixture.repository.get(person.id).unwrap().picture, none());
}
