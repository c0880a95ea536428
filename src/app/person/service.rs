//! Person 数据访问层

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::{debug, error};

use super::model::Person;

// 表结构由外部维护，显式转换列类型以匹配 `Person` 与 i64 id
const QUERY_BY_NAME: &str =
    "SELECT username::TEXT AS username, age::INT4 AS age FROM persons WHERE username = $1";
const QUERY_ALL: &str = "SELECT username::TEXT AS username, age::INT4 AS age FROM persons";
const INSERT_PERSON: &str =
    "INSERT INTO persons (username, age) VALUES ($1, $2) RETURNING id::INT8 AS id";

/// 数据访问错误
///
/// `NotFound` 与其他存储失败可区分，分别映射为 404 与 500。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    DataAccess(String),
}

/// 数据访问接口：三条参数化语句，无事务、无批处理
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// 按名字查询单行
    async fn fetch_by_name(&self, name: &str) -> Result<Person, StoreError>;

    /// 查询全部行，保持结果顺序；空表返回空序列
    async fn fetch_all(&self) -> Result<Vec<Person>, StoreError>;

    /// 插入一行并返回数据库生成的 id
    async fn insert(&self, person: &Person) -> Result<i64, StoreError>;
}

/// 基于 PostgreSQL 连接池的实现
#[derive(Clone)]
pub struct PgPersonStore {
    pool: PgPool,
}

impl PgPersonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 记录错误后返回，不终止进程
fn data_access_error(context: &str, err: sqlx::Error) -> StoreError {
    error!("error when {} : {}", context, err);
    StoreError::DataAccess(err.to_string())
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn fetch_by_name(&self, name: &str) -> Result<Person, StoreError> {
        let person = sqlx::query_as::<_, Person>(QUERY_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| data_access_error("query by name", e))?
            .ok_or(StoreError::NotFound)?;

        debug!("Age of {} is {}", person.name, person.age);
        Ok(person)
    }

    async fn fetch_all(&self) -> Result<Vec<Person>, StoreError> {
        sqlx::query_as::<_, Person>(QUERY_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| data_access_error("query persons", e))
    }

    async fn insert(&self, person: &Person) -> Result<i64, StoreError> {
        let (id,): (i64,) = sqlx::query_as(INSERT_PERSON)
            .bind(&person.name)
            .bind(person.age)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| data_access_error("insert table", e))?;

        debug!("id inserted {}", id);
        Ok(id)
    }
}
