use crate::PersonDto;

use serde::Serialize;

/// Single person response
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub person: PersonDto,
}
