// ==========================================
// 连锁群报告页组件 - SQLite 查询执行器
// ==========================================
// 职责: 执行路径查询，返回只进结果集
// 红线: 只读，不含业务逻辑
// ==========================================

use crate::db::open_sqlite_connection;
use crate::query::{Model, PathQuery, QueryValue};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::executor::{ExportResults, QueryExecutor, ResultRow, ResultValue};
use crate::repository::sql_builder::compile_path_query;
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, Result as SqliteResult, ToSql};
use std::sync::{Arc, Mutex};

impl ToSql for QueryValue {
    fn to_sql(&self) -> SqliteResult<ToSqlOutput<'_>> {
        match self {
            QueryValue::Integer(v) => v.to_sql(),
            QueryValue::Text(v) => v.to_sql(),
        }
    }
}

impl From<ValueRef<'_>> for ResultValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => ResultValue::Null,
            ValueRef::Integer(v) => ResultValue::Integer(v),
            ValueRef::Real(v) => ResultValue::Real(v),
            ValueRef::Text(v) => ResultValue::Text(String::from_utf8_lossy(v).into_owned()),
            ValueRef::Blob(v) => ResultValue::Blob(v.to_vec()),
        }
    }
}

// ==========================================
// SqliteQueryExecutor - SQLite 查询执行器
// ==========================================
pub struct SqliteQueryExecutor {
    conn: Arc<Mutex<Connection>>,
    model: Model,
}

impl SqliteQueryExecutor {
    /// 打开数据库文件并使用默认数据模型
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            model: Model::genetic_map(),
        })
    }

    /// 从已有连接创建执行器
    pub fn from_connection(conn: Arc<Mutex<Connection>>, model: Model) -> Self {
        Self { conn, model }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl QueryExecutor for SqliteQueryExecutor {
    fn execute(&self, query: &PathQuery) -> RepositoryResult<ExportResults> {
        let compiled = compile_path_query(&self.model, query)?;
        tracing::debug!(query = %query, sql = %compiled.sql, "执行路径查询");

        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&compiled.sql)?;
        let column_count = compiled.column_count;

        let rows = stmt
            .query_map(params_from_iter(compiled.params.iter()), |row| {
                (0..column_count)
                    .map(|i| row.get_ref(i).map(ResultValue::from))
                    .collect::<SqliteResult<Vec<_>>>()
                    .map(ResultRow::new)
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        tracing::debug!(rows = rows.len(), "路径查询完成");
        Ok(ExportResults::new(query.views().to_vec(), rows))
    }
}
