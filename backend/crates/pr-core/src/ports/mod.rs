//! Collaborators consumed by the record manager.

pub mod access_policy;
pub mod blob_store;
pub mod password_hasher;
pub mod person_repository;
