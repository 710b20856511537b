//! Person registry core: the person model, the error taxonomy, the
//! collaborator traits the record manager depends on, and the record
//! manager itself ([`PersonService`]).

pub mod error;
pub mod models;
pub mod ports;
pub mod service;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::caller::Caller;
pub use models::new_person::NewPerson;
pub use models::person::Person;
pub use models::person_changes::PersonChanges;
pub use models::person_registration::PersonRegistration;
pub use models::picture_upload::PictureUpload;
pub use ports::access_policy::{AccessPolicy, OwnerOnly};
pub use ports::blob_store::BlobStore;
pub use ports::password_hasher::{HashingError, PasswordHasher};
pub use ports::person_repository::{
    PersonRepository, RepositoryError, RepositoryResult, SortOrder,
};
pub use service::person_service::PersonService;
pub use service::upload_policy::UploadPolicy;

#[cfg(test)]
mod tests;
