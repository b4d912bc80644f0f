use std::path::PathBuf;

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow, Sqlite};
use thiserror::Error;

pub mod filter;
pub mod leagues;
pub mod matches;
pub mod pagination;
pub mod teams;

pub use filter::{build_where_clause, Filter};
pub use pagination::{paginate, Page, PageRequest};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to open database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl StoreError {
    /// The store could not be reached at all, as opposed to a query failing.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Missing(_) | StoreError::Connect(_))
    }
}

/// A positional query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        SqlValue::Integer(i64::from(value))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// Read-only handle on the SQLite file. Holds no connection: each call opens
/// its own and closes it before returning.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false);

        Self { path, options }
    }

    /// Run `sql` and return every row in result order.
    pub async fn fetch_many<T>(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = self.connect().await?;
        let rows = fetch_many_on(&mut conn, sql, params).await;
        self.release(conn).await;
        rows
    }

    /// Run `sql` and return its first row, `None` when the result is empty.
    pub async fn fetch_one<T>(&self, sql: &str, params: &[SqlValue]) -> Result<Option<T>, StoreError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = self.connect().await?;
        let row = fetch_one_on(&mut conn, sql, params).await;
        self.release(conn).await;
        row
    }

    /// Round-trip one query; returns the number of leagues.
    pub async fn ping(&self) -> Result<i64, StoreError> {
        let (count,) = self
            .fetch_one::<(i64,)>("SELECT COUNT(*) FROM leagues", &[])
            .await?
            .unwrap_or((0,));
        Ok(count)
    }

    pub(crate) async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        // sqlite reports a missing read-only file as a generic open error
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(StoreError::Missing(self.path.clone()));
        }

        self.options.connect().await.map_err(StoreError::Connect)
    }

    pub(crate) async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
    }
}

pub(crate) async fn fetch_many_on<T>(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<T>, StoreError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let rows = bind_params(sqlx::query_as::<_, T>(sql), params)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

pub(crate) async fn fetch_one_on<T>(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[SqlValue],
) -> Result<Option<T>, StoreError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let row = bind_params(sqlx::query_as::<_, T>(sql), params)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

fn bind_params<'q, T>(
    mut query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    params: &'q [SqlValue],
) -> QueryAs<'q, Sqlite, T, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlValue::Integer(value) => query.bind(*value),
            SqlValue::Text(value) => query.bind(value.as_str()),
        };
    }
    query
}
