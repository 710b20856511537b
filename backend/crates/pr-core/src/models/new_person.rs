/// Draft handed to the repository on creation. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
