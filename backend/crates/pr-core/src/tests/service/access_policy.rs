use crate::tests::fakes::Fixture;
use crate::{AccessPolicy, Caller, OwnerOnly, Person, PersonChanges};

use std::sync::Arc;

use googletest::prelude::*;

/// Owners plus a fixed administrator id.
struct AdminOverride {
    admin_id: i64,
}

impl AccessPolicy for AdminOverride {
    fn is_authorized(&self, caller: &Caller, person: &Person) -> bool {
        caller.subject_id == self.admin_id || OwnerOnly.is_authorized(caller, person)
    }
}

#[tokio::test]
async fn given_admin_policy_when_admin_updates_other_person_then_allowed() {
    // Given
    let fixture = Fixture::new();
    let admin = fixture.repository.seed("admin", "admin@x.com");
    let person = fixture.repository.seed("caio", "caio@x.com");
    let service = fixture
        .service
        .clone()
        .with_access_policy(Arc::new(AdminOverride { admin_id: admin.id }));

    // When
    let result = service
        .update(
            person.id,
            PersonChanges {
                name: Some("renamed by admin".to_string()),
                password: None,
            },
            &Caller::new(admin.id),
        )
        .await;

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(
        fixture.repository.get(person.id).unwrap().name,
        eq("renamed by admin")
    );
}

#[tokio::test]
async fn given_admin_policy_when_admin_removes_other_person_then_allowed() {
    let fixture = Fixture::new();
    let admin = fixture.repository.seed("admin", "admin@x.com");
    let person = fixture.repository.seed("caio", "caio@x.com");
    let service = fixture
        .service
        .clone()
        .with_access_policy(Arc::new(AdminOverride { admin_id: admin.id }));

    let removed = service.remove(person.id, &Caller::new(admin.id)).await;

    assert_that!(removed, ok(anything()));
    assert_that!(fixture.repository.get(person.id), none());
}
