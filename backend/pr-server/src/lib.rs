pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod storage;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_caller::AuthenticatedCaller,
    people::{
        create_person_request::CreatePersonRequest,
        people::{
            PICTURE_FIELD, create_person, delete_person, get_person, list_people, update_person,
            upload_picture,
        },
        person_dto::PersonDto,
        person_list_response::PersonListResponse,
        person_response::PersonResponse,
        update_person_request::UpdatePersonRequest,
    },
    validation::RequestValidator,
};
pub use app_state::AppState;
pub use storage::fs_blob_store::FsBlobStore;

pub use crate::routes::build_router;
