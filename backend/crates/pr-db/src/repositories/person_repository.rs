use crate::{DbError, Result as DbErrorResult};

use pr_core::{
    ErrorLocation, NewPerson, Person, PersonRepository, RepositoryError, RepositoryResult,
    SortOrder,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const TABLE: &str = "people";

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, password_hash, picture, created_at, updated_at FROM people";

#[derive(FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    picture: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<PersonRow> for Person {
    type Error = DbError;

    fn try_from(row: PersonRow) -> Result<Self, Self::Error> {
        Ok(Person {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            picture: row.picture,
            created_at: timestamp(row.created_at, "created_at")?,
            updated_at: timestamp(row.updated_at, "updated_at")?,
        })
    }
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::InvalidRow {
        table: TABLE,
        message: format!("{column} out of range: {secs}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// SQLite-backed [`PersonRepository`]. Timestamps are stored as unix seconds.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: &NewPerson) -> DbErrorResult<Person> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO people (name, email, password_hash, picture, created_at, updated_at)
              VALUES (?, ?, ?, NULL, ?, ?)
              "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get(id).await?.ok_or_else(|| DbError::RowNotFound {
            table: TABLE,
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn update(&self, person: &Person) -> DbErrorResult<Person> {
        let updated_at = person.updated_at.timestamp();

        let result = sqlx::query(
            r#"
              UPDATE people
              SET name = ?, email = ?, password_hash = ?, picture = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&person.name)
        .bind(&person.email)
        .bind(&person.password_hash)
        .bind(&person.picture)
        .bind(updated_at)
        .bind(person.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RowNotFound {
                table: TABLE,
                id: person.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.get(person.id).await?.ok_or_else(|| DbError::RowNotFound {
            table: TABLE,
            id: person.id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn get(&self, id: i64) -> DbErrorResult<Option<Person>> {
        let row: Option<PersonRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Person::try_from).transpose()
    }

    pub async fn list(&self, order: SortOrder) -> DbErrorResult<Vec<Person>> {
        let sql = match order {
            SortOrder::Ascending => format!("{SELECT_COLUMNS} ORDER BY id ASC"),
            SortOrder::Descending => format!("{SELECT_COLUMNS} ORDER BY id DESC"),
        };

        let rows: Vec<PersonRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(Person::try_from).collect()
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn insert(&self, draft: &NewPerson) -> RepositoryResult<Person> {
        self.create(draft).await.map_err(RepositoryError::from)
    }

    async fn save(&self, person: &Person) -> RepositoryResult<Person> {
        self.update(person).await.map_err(RepositoryError::from)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Person>> {
        self.get(id).await.map_err(RepositoryError::from)
    }

    async fn find_all(&self, order: SortOrder) -> RepositoryResult<Vec<Person>> {
        self.list(order).await.map_err(RepositoryError::from)
    }

    async fn remove(&self, person: &Person) -> RepositoryResult<()> {
        if self.delete(person.id).await.map_err(RepositoryError::from)? {
            return Ok(());
        }

        log::warn!("Person {} vanished before it could be removed", person.id);
        Err(RepositoryError::from(DbError::RowNotFound {
            table: TABLE,
            id: person.id,
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
