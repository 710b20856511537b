pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{open, open_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::person_repository::SqlitePersonRepository;
