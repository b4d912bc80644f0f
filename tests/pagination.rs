mod common;

use common::Fixture;
use football_api::db::{paginate, PageRequest, SqlValue, Store, StoreError};

const TEAM_IDS: &str = "SELECT team_id, name FROM teams ORDER BY team_id";

#[tokio::test]
async fn pages_never_exceed_size_and_count_everything() {
    let fixture = Fixture::new().await;
    let store = Store::new(&fixture.path);

    for size in 1..=7u32 {
        let mut seen = Vec::new();
        let mut page_no = 1;
        loop {
            let page = paginate::<(i64, String)>(&store, TEAM_IDS, &[], PageRequest::new(page_no, size, 100))
                .await
                .unwrap();

            assert_eq!(page.total, 6);
            assert_eq!(page.total_pages, (6 + i64::from(size) - 1) / i64::from(size));
            assert!(page.data.len() <= size as usize);

            if page.data.is_empty() {
                break;
            }
            seen.extend(page.data.into_iter().map(|(id, _)| id));
            page_no += 1;
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6], "size {size}");
    }
}

#[tokio::test]
async fn bound_parameters_apply_to_count_and_window() {
    let fixture = Fixture::new().await;
    let store = Store::new(&fixture.path);

    let page = paginate::<(i64, String)>(
        &store,
        "SELECT team_id, name FROM teams WHERE league_id = ? ORDER BY team_id",
        &[SqlValue::Integer(2)],
        PageRequest::new(1, 1, 100),
    )
    .await
    .unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data, vec![(3, "Real Madrid CF".to_string())]);
}

#[tokio::test]
async fn empty_result_has_zero_pages() {
    let fixture = Fixture::new().await;
    let store = Store::new(&fixture.path);

    let page = paginate::<(i64, String)>(
        &store,
        "SELECT team_id, name FROM teams WHERE league_id = ?",
        &[SqlValue::Integer(42)],
        PageRequest::new(1, 20, 100),
    )
    .await
    .unwrap();

    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn fetch_one_distinguishes_absent_rows() {
    let fixture = Fixture::new().await;
    let store = Store::new(&fixture.path);

    let row: Option<(String,)> = store
        .fetch_one("SELECT name FROM leagues WHERE league_id = ?", &[SqlValue::Integer(1)])
        .await
        .unwrap();
    assert_eq!(row, Some(("Premier League".to_string(),)));

    let row: Option<(String,)> = store
        .fetch_one("SELECT name FROM leagues WHERE league_id = ?", &[SqlValue::Integer(7)])
        .await
        .unwrap();
    assert_eq!(row, None);

    assert_eq!(store.ping().await.unwrap(), 2);
}

#[tokio::test]
async fn store_errors_are_classified() {
    let fixture = Fixture::new().await;
    let store = Store::new(&fixture.path);

    let err = store
        .fetch_many::<(i64,)>("SELECT nope FROM nowhere", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Query(_)));
    assert!(!err.is_unavailable());

    let missing = Store::new(fixture.path.with_file_name("absent.sqlite"));
    let err = missing.ping().await.unwrap_err();
    assert!(matches!(err, StoreError::Missing(_)));
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn store_is_read_only() {
    let fixture = Fixture::new().await;
    let store = Store::new(&fixture.path);

    let err = store
        .fetch_many::<(i64,)>("DELETE FROM leagues RETURNING league_id", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Query(_)));
    assert_eq!(store.ping().await.unwrap(), 2);
}
