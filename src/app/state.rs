// ==========================================
// 连锁群报告页组件 - 应用状态
// ==========================================
// 职责: 管理共享连接，按报告页构造展示组件
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::ConfigManager;
use crate::db::{init_schema, open_sqlite_connection, read_schema_version, CURRENT_SCHEMA_VERSION};
use crate::displayer::{LinkageGroupDisplayer, ReportContext, ReportObject};
use crate::domain::ReportSubjectKind;
use crate::query::Model;
use crate::repository::{QueryExecutor, RepositoryError, RepositoryResult, SqliteQueryExecutor};

/// 应用状态
///
/// 执行器与配置管理器共享同一个连接
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 查询执行器
    pub executor: Arc<dyn QueryExecutor>,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// 只读打开已有数据库，不建表；schema_version 缺失或落后时只告警
    pub fn new(db_path: String) -> RepositoryResult<Self> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let conn = open_state_connection(&db_path)?;
        match read_schema_version(&conn)? {
            Some(v) if v >= CURRENT_SCHEMA_VERSION => {}
            None => tracing::warn!(
                expected = CURRENT_SCHEMA_VERSION,
                "数据库缺少 schema_version，数据模型表可能不存在"
            ),
            Some(v) => tracing::warn!(
                found = v,
                expected = CURRENT_SCHEMA_VERSION,
                "schema_version 与当前代码不一致"
            ),
        }

        Self::from_connection(db_path, conn)
    }

    /// 初始化数据模型后创建AppState（本地演示/空库）
    pub fn bootstrap(db_path: String) -> RepositoryResult<Self> {
        tracing::info!("初始化数据模型，数据库路径: {}", db_path);

        let conn = open_state_connection(&db_path)?;
        init_schema(&conn)?;

        Self::from_connection(db_path, conn)
    }

    fn from_connection(db_path: String, conn: Connection) -> RepositoryResult<Self> {
        let conn = Arc::new(Mutex::new(conn));
        let executor: Arc<dyn QueryExecutor> = Arc::new(SqliteQueryExecutor::from_connection(
            conn.clone(),
            Model::genetic_map(),
        ));
        let config_manager = Arc::new(ConfigManager::from_connection(conn)?);

        Ok(Self {
            db_path,
            executor,
            config_manager,
        })
    }

    /// 按报告页类型加载配置并构造展示组件
    pub fn displayer_for(&self, kind: Option<ReportSubjectKind>) -> RepositoryResult<LinkageGroupDisplayer> {
        let config = self.config_manager.load_display_config(kind)?;
        Ok(LinkageGroupDisplayer::new(self.executor.clone(), config))
    }

    /// 报告页展示（供请求处理层调用）
    pub fn display_report(&self, report: &ReportObject) -> anyhow::Result<ReportContext> {
        let kind = ReportSubjectKind::from_class_name(&report.class_name);
        let displayer = self.displayer_for(kind)?;

        let mut ctx = ReportContext::new();
        displayer.display(report, &mut ctx)?;
        Ok(ctx)
    }
}

fn open_state_connection(db_path: &str) -> RepositoryResult<Connection> {
    open_sqlite_connection(db_path)
        .map_err(|e| RepositoryError::DatabaseConnectionError(format!("{}: {}", db_path, e)))
}

/// 获取默认数据库路径
///
/// 顺序: 环境变量 LINKAGE_TRACKS_DB_PATH → 用户数据目录 → 当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("LINKAGE_TRACKS_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./linkage_tracks.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("linkage-tracks");
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("linkage_tracks.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_keys;
    use crate::displayer::{TRACKS_COUNT, TRACKS_JSON};
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(path.ends_with(".db"));
    }

    #[test]
    fn test_new_does_not_create_tables() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();

        let state = AppState::new(db_path.clone()).unwrap();
        assert!(state
            .display_report(&ReportObject::new(1, "GeneticMap"))
            .is_err());

        let conn = open_sqlite_connection(&db_path).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
        assert_eq!(read_schema_version(&conn).unwrap(), None);
    }

    #[test]
    fn test_new_on_existing_database_reads_only() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        AppState::bootstrap(db_path.clone()).unwrap();

        let state = AppState::new(db_path).unwrap();
        let ctx = state
            .display_report(&ReportObject::new(1, "GeneticMap"))
            .unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_display_report_uses_stored_colors() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        let state = AppState::bootstrap(db_path.clone()).unwrap();
        assert_eq!(
            read_schema_version(&open_sqlite_connection(&db_path).unwrap()).unwrap(),
            Some(CURRENT_SCHEMA_VERSION)
        );

        {
            let conn = open_sqlite_connection(&db_path).unwrap();
            conn.execute_batch(
                "INSERT INTO linkage_group (id, identifier, length, number) VALUES (3, 'LG3', 42.0, 3);",
            )
            .unwrap();
        }
        state
            .config_manager
            .set_global_config_value(config_keys::LINKAGE_GROUP_FILL, "navy")
            .unwrap();

        let ctx = state
            .display_report(&ReportObject::new(3, "LinkageGroup"))
            .unwrap();
        assert_eq!(ctx.get_attribute(TRACKS_COUNT).and_then(|v| v.as_i64()), Some(1));
        let json = ctx.get_attribute(TRACKS_JSON).and_then(|v| v.as_str()).unwrap();
        assert!(json.contains(r#""fill":"navy""#));
    }

    #[test]
    fn test_display_report_rejects_unknown_class() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        let state = AppState::bootstrap(db_path).unwrap();

        assert!(state.display_report(&ReportObject::new(1, "Protein")).is_err());
    }
}
