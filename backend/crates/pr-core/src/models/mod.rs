pub mod caller;
pub mod new_person;
pub mod person;
pub mod person_changes;
pub mod person_registration;
pub mod picture_upload;
