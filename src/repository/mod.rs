// ==========================================
// 连锁群报告页组件 - 数据仓储层
// ==========================================
// 职责: 执行结构化查询，屏蔽数据库细节
// 约束: 所有查询使用参数化，防止 SQL 注入
// ==========================================

pub mod error;
pub mod executor;
pub mod sql_builder;
pub mod sqlite_executor;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use executor::{ExportResults, FieldError, QueryExecutor, ResultRow, ResultValue};
pub use sql_builder::{compile_path_query, CompiledQuery, SqlQueryBuilder};
pub use sqlite_executor::SqliteQueryExecutor;
