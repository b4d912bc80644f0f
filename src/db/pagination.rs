use serde::Serialize;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Connection, FromRow};

use super::{fetch_many_on, fetch_one_on, SqlValue, Store, StoreError};

/// Page envelope returned by every list endpoint.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
    pub total_pages: i64,
}

/// A validated, 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// `size` is clamped to `max_size`. Zero values are the caller's to reject.
    pub fn new(page: u32, size: u32, max_size: u32) -> Self {
        Self {
            page,
            size: size.min(max_size),
        }
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).max(0) * i64::from(self.size)
    }
}

pub fn total_pages(total: i64, size: u32) -> i64 {
    if total <= 0 || size == 0 {
        return 0;
    }
    let size = i64::from(size);
    (total + size - 1) / size
}

/// Count the rows of `base_query` and fetch one window of it.
///
/// `base_query` must not carry its own LIMIT/OFFSET. Both reads happen inside
/// one read transaction on one connection, so `total` and `data` come from the
/// same snapshot.
pub async fn paginate<T>(
    store: &Store,
    base_query: &str,
    params: &[SqlValue],
    request: PageRequest,
) -> Result<Page<T>, StoreError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut conn = store.connect().await?;
    let page = paginate_on(&mut conn, base_query, params, request).await;
    store.release(conn).await;
    page
}

async fn paginate_on<T>(
    conn: &mut SqliteConnection,
    base_query: &str,
    params: &[SqlValue],
    request: PageRequest,
) -> Result<Page<T>, StoreError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let count_query = format!("SELECT COUNT(*) FROM ({base_query})");
    let window_query = format!("{base_query} LIMIT ? OFFSET ?");

    let mut window_params = params.to_vec();
    window_params.push(SqlValue::from(request.size));
    window_params.push(SqlValue::Integer(request.offset()));

    let mut tx = conn.begin().await?;

    let (total,) = fetch_one_on::<(i64,)>(&mut tx, &count_query, params)
        .await?
        .unwrap_or((0,));
    let data = fetch_many_on::<T>(&mut tx, &window_query, &window_params).await?;

    tx.commit().await?;

    Ok(Page {
        data,
        total,
        page: request.page,
        size: request.size,
        total_pages: total_pages(total, request.size),
    })
}
