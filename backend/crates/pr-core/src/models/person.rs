//! Person entity - the single resource managed by the registry.

use crate::Caller;

use chrono::{DateTime, Utc};

/// A registered person.
///
/// `password_hash` always holds the hasher's output; the plaintext never
/// reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    /// Unique across all persons
    pub email: String,
    pub password_hash: String,
    /// Filename of the stored profile picture, if one was uploaded
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Self-ownership: a person owns exactly their own record.
    pub fn is_owned_by(&self, caller: &Caller) -> bool {
        self.id == caller.subject_id
    }

    /// Merge a partial update onto this record.
    ///
    /// `password_hash` must already be the hasher's output.
    pub fn apply(&mut self, name: Option<String>, password_hash: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(password_hash) = password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Utc::now();
    }

    pub fn set_picture(&mut self, filename: String) {
        self.picture = Some(filename);
        self.updated_at = Utc::now();
    }
}
