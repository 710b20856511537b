use crate::PersonDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PersonListResponse {
    pub people: Vec<PersonDto>,
}
