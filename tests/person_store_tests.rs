//! PgPersonStore 针对真实 PostgreSQL 的测试
//!
//! 需要设置 `DATABASE_URL`，运行方式：`cargo test -- --ignored`

use person_gateway::app::person::{Person, PersonStore, PgPersonStore, StoreError};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// 单连接池 + 临时表：每个测试拥有独立的 `persons`，列类型与外部维护的表一致
async fn create_test_pool() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::query(
        r#"
        CREATE TEMP TABLE persons (
            id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            username VARCHAR(50),
            age NUMERIC(3),
            creation_time TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create temp table");

    pool
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_then_fetch_by_name() {
    let store = PgPersonStore::new(create_test_pool().await);

    let id = store.insert(&Person::new("cris", 26)).await.unwrap();
    assert!(id > 0);

    let person = store.fetch_by_name("cris").await.unwrap();
    assert_eq!(person, Person::new("cris", 26));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_returns_increasing_ids() {
    let store = PgPersonStore::new(create_test_pool().await);

    let first = store.insert(&Person::new("cris", 26)).await.unwrap();
    let second = store.insert(&Person::new("dolin", 31)).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_fetch_all_on_empty_table() {
    let store = PgPersonStore::new(create_test_pool().await);
    assert_eq!(store.fetch_all().await.unwrap(), Vec::<Person>::new());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_fetch_all_returns_every_row() {
    let store = PgPersonStore::new(create_test_pool().await);
    store.insert(&Person::new("cris", 26)).await.unwrap();
    store.insert(&Person::new("dolin", 31)).await.unwrap();

    let mut people = store.fetch_all().await.unwrap();
    people.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(people, vec![Person::new("cris", 26), Person::new("dolin", 31)]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_name_is_not_found() {
    let store = PgPersonStore::new(create_test_pool().await);
    assert_eq!(
        store.fetch_by_name("nobody").await.unwrap_err(),
        StoreError::NotFound
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_closed_pool_is_data_access_error() {
    let pool = create_test_pool().await;
    let store = PgPersonStore::new(pool.clone());
    pool.close().await;

    let err = store.fetch_by_name("cris").await.unwrap_err();
    assert!(matches!(err, StoreError::DataAccess(_)), "{:?}", err);
}
