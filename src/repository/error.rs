// ==========================================
// 连锁群报告页组件 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::query::PathError;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 查询描述错误 =====
    #[error("查询路径无效: {0}")]
    InvalidPath(#[from] PathError),

    #[error("查询没有视图列")]
    EmptyQuery,

    // ===== 数据库错误 =====
    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => RepositoryError::DatabaseQueryError(msg),
            rusqlite::Error::SqliteFailure(e, None) => {
                RepositoryError::DatabaseQueryError(e.to_string())
            }
            rusqlite::Error::InvalidPath(path) => {
                RepositoryError::DatabaseConnectionError(path.display().to_string())
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rusqlite_error() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err: RepositoryError = conn
            .execute("SELECT * FROM missing_table", [])
            .unwrap_err()
            .into();

        match err {
            RepositoryError::DatabaseQueryError(msg) => assert!(msg.contains("missing_table")),
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_path_error_conversion() {
        let err: RepositoryError = PathError::UnknownClass("Gene".to_string()).into();
        assert_eq!(err.to_string(), "查询路径无效: 未知的类: Gene");
    }
}
