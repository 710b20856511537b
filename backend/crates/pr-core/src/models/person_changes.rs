/// Partial update for [`crate::PersonService::update`].
///
/// `password` is plaintext; it is hashed before it touches the record.
#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl PersonChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}
