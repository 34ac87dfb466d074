// ==========================================
// 连锁群报告页组件 - 配置管理器
// ==========================================
// 职责: 显示配置加载、覆写管理
// 存储: config_kv 表 (key-value + scope)
// 覆写顺序: 默认值 < global < 报告页类型 (scope_id = 类名)
// ==========================================

use crate::config::display_config::DisplayConfig;
use crate::db::configure_sqlite_connection;
use crate::domain::ReportSubjectKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigScope - 配置作用域
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,                         // 全局
    ReportPage(ReportSubjectKind),  // 指定报告页类型
}

impl ConfigScope {
    pub fn scope_id(&self) -> &'static str {
        match self {
            ConfigScope::Global => "global",
            ConfigScope::ReportPage(kind) => kind.class_name(),
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 轨道配色
    pub const LINKAGE_GROUP_FILL: &str = "displayer/linkage_group_fill";
    pub const MARKER_FILL: &str = "displayer/marker_fill";
    pub const QTL_FILL: &str = "displayer/qtl_fill";
    pub const OUTLINE: &str = "displayer/outline";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 读取指定作用域的配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, scope: ConfigScope, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![scope.scope_id(), key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取 global scope 的配置值
    pub fn get_global_config_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        self.get_config_value(ConfigScope::Global, key)
    }

    /// 写入配置值（存在则覆盖）
    pub fn set_config_value(&self, scope: ConfigScope, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![scope.scope_id(), key, value],
        )?;
        Ok(())
    }

    /// 写入 global scope 配置值
    pub fn set_global_config_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        self.set_config_value(ConfigScope::Global, key, value)
    }

    /// 按作用域覆写到配置项（空白值视为未配置）
    fn overlay(&self, scope: ConfigScope, config: &mut DisplayConfig) -> RepositoryResult<()> {
        let targets: [(&str, &mut String); 4] = [
            (config_keys::LINKAGE_GROUP_FILL, &mut config.linkage_group_fill),
            (config_keys::MARKER_FILL, &mut config.marker_fill),
            (config_keys::QTL_FILL, &mut config.qtl_fill),
            (config_keys::OUTLINE, &mut config.outline),
        ];

        for (key, target) in targets {
            if let Some(value) = self.get_config_value(scope, key)? {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    *target = trimmed.to_string();
                }
            }
        }
        Ok(())
    }

    /// 加载显示配置
    ///
    /// # 参数
    /// - kind: 报告页类型；None 表示只读取 global
    pub fn load_display_config(
        &self,
        kind: Option<ReportSubjectKind>,
    ) -> RepositoryResult<DisplayConfig> {
        let mut config = DisplayConfig::default();
        self.overlay(ConfigScope::Global, &mut config)?;
        if let Some(kind) = kind {
            self.overlay(ConfigScope::ReportPage(kind), &mut config)?;
        }

        tracing::debug!(?kind, ?config, "显示配置已加载");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn setup_manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_defaults_without_rows() {
        let manager = setup_manager();
        let config = manager.load_display_config(None).unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.linkage_group_fill, "purple");
        assert_eq!(config.marker_fill, "darkred");
        assert_eq!(config.qtl_fill, "yellow");
        assert_eq!(config.outline, "black");
    }

    #[test]
    fn test_scope_overlay_order() {
        let manager = setup_manager();
        manager
            .set_global_config_value(config_keys::QTL_FILL, "orange")
            .unwrap();
        manager
            .set_global_config_value(config_keys::OUTLINE, "gray")
            .unwrap();
        manager
            .set_config_value(
                ConfigScope::ReportPage(ReportSubjectKind::Qtl),
                config_keys::QTL_FILL,
                "gold",
            )
            .unwrap();

        let global = manager.load_display_config(None).unwrap();
        assert_eq!(global.qtl_fill, "orange");
        assert_eq!(global.outline, "gray");

        let qtl_page = manager
            .load_display_config(Some(ReportSubjectKind::Qtl))
            .unwrap();
        assert_eq!(qtl_page.qtl_fill, "gold");
        assert_eq!(qtl_page.outline, "gray");

        let map_page = manager
            .load_display_config(Some(ReportSubjectKind::GeneticMap))
            .unwrap();
        assert_eq!(map_page.qtl_fill, "orange");
    }

    #[test]
    fn test_blank_value_is_ignored_and_upsert_overwrites() {
        let manager = setup_manager();
        manager
            .set_global_config_value(config_keys::MARKER_FILL, "  ")
            .unwrap();
        assert_eq!(
            manager.load_display_config(None).unwrap().marker_fill,
            "darkred"
        );

        manager
            .set_global_config_value(config_keys::MARKER_FILL, "red")
            .unwrap();
        manager
            .set_global_config_value(config_keys::MARKER_FILL, "blue")
            .unwrap();
        assert_eq!(
            manager
                .get_global_config_value(config_keys::MARKER_FILL)
                .unwrap()
                .as_deref(),
            Some("blue")
        );
    }
}
