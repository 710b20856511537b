use crate::CoreError;
use crate::tests::fakes::Fixture;

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_registry_when_find_all_then_empty() {
    let fixture = Fixture::new();

    let people = fixture.service.find_all().await.unwrap();

    assert_that!(people, is_empty());
}

#[tokio::test]
async fn given_several_people_when_find_all_then_ordered_by_id_descending() {
    // Given
    let fixture = Fixture::new();
    let a = fixture.repository.seed("A", "a@x.com");
    let b = fixture.repository.seed("B", "b@x.com");
    let c = fixture.repository.seed("C", "c@x.com");

    // When
    let people = fixture.service.find_all().await.unwrap();

    // Then
    let ids: Vec<i64> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn given_existing_id_when_find_one_twice_then_results_are_equal() {
    // Given
    let fixture = Fixture::new();
    let seeded = fixture.repository.seed("caio", "caio@x.com");

    // When
    let first = fixture.service.find_one(seeded.id).await.unwrap();
    let second = fixture.service.find_one(seeded.id).await.unwrap();

    // Then
    assert_that!(first, eq(&seeded));
    assert_that!(second, eq(&first));
}

#[tokio::test]
async fn given_absent_id_when_find_one_then_not_found() {
    let fixture = Fixture::new();

    let result = fixture.service.find_one(42).await;

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
    let err = result.unwrap_err();
    assert_that!(err.error_code(), eq("NOT_FOUND"));
    assert_that!(err.to_string(), contains_substring("Person not found"));
}
