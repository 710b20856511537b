/// Registration input for [`crate::PersonService::create`].
///
/// Field shape (non-empty name, email format, password length) is checked
/// before this reaches the service.
#[derive(Debug, Clone)]
pub struct PersonRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}
