pub mod person_service;
pub mod upload_policy;
