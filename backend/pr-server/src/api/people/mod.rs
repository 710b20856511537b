pub mod create_person_request;
pub mod people;
pub mod person_dto;
pub mod person_list_response;
pub mod person_response;
pub mod update_person_request;
