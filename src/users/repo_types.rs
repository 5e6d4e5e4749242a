use serde::Serialize;
use sqlx::{
    error::UnexpectedNullError,
    sqlite::{Sqlite, SqliteRow},
    Decode, FromRow, Row, Type,
};

/// One row of the `user` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub description: String,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // stored, never sent to clients
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

// Positional decode in table column order: id, description, fullname, email, password.
impl<'r> FromRow<'r, SqliteRow> for User {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: required(row, 0)?,
            description: required(row, 1)?,
            fullname: required(row, 2)?,
            email: required(row, 3)?,
            password: required(row, 4)?,
        })
    }
}

/// sqlite decodes NULL into `""`/`0` for plain types; reject it instead.
fn required<'r, T>(row: &'r SqliteRow, index: usize) -> Result<T, sqlx::Error>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get::<Option<T>, _>(index)?
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: format!("{index:?}"),
            source: Box::new(UnexpectedNullError),
        })
}
