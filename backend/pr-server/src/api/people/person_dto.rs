use pr_core::Person;

use serde::Serialize;

/// Person DTO for JSON serialization. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct PersonDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Person> for PersonDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            picture: p.picture,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
