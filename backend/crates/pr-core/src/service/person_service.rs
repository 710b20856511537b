//! Record manager for person records.
//!
//! Owns the create/read/update/delete flows and picture upload, and is the
//! only place where authorization and conflict translation happen:
//!
//! - `create` maps the repository's constraint-violation signal to
//!   [`CoreError::Conflict`]; every other repository failure passes through.
//! - `update` and `remove` resolve the record first, so a missing id is
//!   always [`CoreError::NotFound`] before any [`CoreError::Forbidden`].
//! - `upload_picture` rejects undersized payloads before touching storage,
//!   and writes the blob before linking it to the record.

use crate::{
    AccessPolicy, BlobStore, Caller, CoreError, NewPerson, OwnerOnly, PasswordHasher, Person,
    PersonChanges, PersonRegistration, PersonRepository, PictureUpload, RepositoryError,
    Result as CoreErrorResult, SortOrder, UploadPolicy,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};

const EMAIL_TAKEN: &str = "email already registered";
const PERSON_NOT_FOUND: &str = "Person not found";
const FILE_TOO_SMALL: &str = "file too small";

#[derive(Clone)]
pub struct PersonService {
    repository: Arc<dyn PersonRepository>,
    hasher: Arc<dyn PasswordHasher>,
    blobs: Arc<dyn BlobStore>,
    access_policy: Arc<dyn AccessPolicy>,
    upload_policy: UploadPolicy,
}

impl PersonService {
    /// Create a service using the [`OwnerOnly`] access policy.
    pub fn new(
        repository: Arc<dyn PersonRepository>,
        hasher: Arc<dyn PasswordHasher>,
        blobs: Arc<dyn BlobStore>,
        upload_policy: UploadPolicy,
    ) -> Self {
        Self {
            repository,
            hasher,
            blobs,
            access_policy: Arc::new(OwnerOnly),
            upload_policy,
        }
    }

    /// Replace the access policy used by `update` and `remove`.
    pub fn with_access_policy(mut self, access_policy: Arc<dyn AccessPolicy>) -> Self {
        self.access_policy = access_policy;
        self
    }

    /// Register a new person.
    pub async fn create(&self, registration: PersonRegistration) -> CoreErrorResult<Person> {
        let password_hash = self.hasher.hash(&registration.password).await?;

        let draft = NewPerson {
            name: registration.name,
            email: registration.email,
            password_hash,
        };

        match self.repository.insert(&draft).await {
            Ok(person) => {
                info!("Registered person {}", person.id);
                Ok(person)
            }
            Err(RepositoryError::ConstraintViolation { constraint, .. }) => {
                debug!("Registration rejected by constraint {constraint}");
                Err(CoreError::conflict(EMAIL_TAKEN))
            }
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Every person, highest id first.
    pub async fn find_all(&self) -> CoreErrorResult<Vec<Person>> {
        Ok(self.repository.find_all(SortOrder::Descending).await?)
    }

    pub async fn find_one(&self, id: i64) -> CoreErrorResult<Person> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(PERSON_NOT_FOUND))
    }

    /// Apply a partial update on behalf of `caller`.
    pub async fn update(
        &self,
        id: i64,
        changes: PersonChanges,
        caller: &Caller,
    ) -> CoreErrorResult<Person> {
        let password_hash = match changes.password.as_deref() {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let mut person = self.find_one(id).await?;
        self.authorize(caller, &person)?;

        person.apply(changes.name, password_hash);
        let saved = self.repository.save(&person).await?;

        info!("Person {} updated by {}", saved.id, caller);
        Ok(saved)
    }

    /// Delete a person on behalf of `caller`, returning the last known state.
    pub async fn remove(&self, id: i64, caller: &Caller) -> CoreErrorResult<Person> {
        let person = self.find_one(id).await?;
        self.authorize(caller, &person)?;

        self.repository.remove(&person).await?;

        info!("Person {} removed by {}", person.id, caller);
        Ok(person)
    }

    /// Store a profile picture for the caller's own record.
    pub async fn upload_picture(
        &self,
        upload: PictureUpload,
        caller: &Caller,
    ) -> CoreErrorResult<Person> {
        let size = upload.size();
        if !self.upload_policy.accepts_size(size) {
            debug!(
                "Rejected {} byte upload from {} (minimum {})",
                size, caller, self.upload_policy.min_size_bytes
            );
            return Err(CoreError::bad_request(FILE_TOO_SMALL));
        }

        let mut person = self.find_one(caller.subject_id).await?;
        let filename = self.upload_policy.filename_for(person.id);

        self.blobs
            .write(&filename, &upload.data)
            .await
            .map_err(|source| CoreError::Storage {
                path: filename.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        person.set_picture(filename);
        let saved = self.repository.save(&person).await?;

        info!("Stored {} byte picture for person {}", size, saved.id);
        Ok(saved)
    }

    fn authorize(&self, caller: &Caller, person: &Person) -> CoreErrorResult<()> {
        if self.access_policy.is_authorized(caller, person) {
            return Ok(());
        }

        warn!("{} denied access to person {}", caller, person.id);
        Err(CoreError::forbidden(format!(
            "{} may not modify person {}",
            caller, person.id
        )))
    }
}
