//! Persistence collaborator for person records.

use crate::{ErrorLocation, NewPerson, Person};

use std::panic::Location;

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a [`PersonRepository`].
///
/// Implementations translate their engine's duplicate-key signal into
/// `ConstraintViolation`; everything else is `Backend`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Constraint violated: {constraint} {location}")]
    ConstraintViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Persistence backend failure: {source} {location}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        location: ErrorLocation,
    },
}

impl RepositoryError {
    #[track_caller]
    pub fn constraint_violation<S: Into<String>>(constraint: S) -> Self {
        Self::ConstraintViolation {
            constraint: constraint.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Backend {
            source: source.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Ordering of [`PersonRepository::find_all`] by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    /// Newest id first
    #[default]
    Descending,
}

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persist a draft and return the stored record with its assigned id.
    async fn insert(&self, draft: &NewPerson) -> RepositoryResult<Person>;

    /// Persist every mutable field of an existing record.
    async fn save(&self, person: &Person) -> RepositoryResult<Person>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Person>>;

    async fn find_all(&self, order: SortOrder) -> RepositoryResult<Vec<Person>>;

    /// Permanently delete the record.
    async fn remove(&self, person: &Person) -> RepositoryResult<()>;
}
