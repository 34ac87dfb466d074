// ==========================================
// 连锁群报告页组件 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 提供只读数据模型的建表语句（测试与本地演示使用）
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 数据模型建表语句
///
/// 说明：
/// - genetic_marker 与 linkage_group 通过 linkage_group_position 关联（位置只在所属连锁群内有意义）
/// - qtl 直接引用 linkage_group
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS config_kv (
    scope_id TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (scope_id, key)
);

CREATE TABLE IF NOT EXISTS genetic_map (
    id INTEGER PRIMARY KEY,
    identifier TEXT
);

CREATE TABLE IF NOT EXISTS linkage_group (
    id INTEGER PRIMARY KEY,
    identifier TEXT,
    length REAL,
    number INTEGER,
    genetic_map_id INTEGER REFERENCES genetic_map(id)
);

CREATE TABLE IF NOT EXISTS genetic_marker (
    id INTEGER PRIMARY KEY,
    primary_identifier TEXT,
    secondary_identifier TEXT
);

CREATE TABLE IF NOT EXISTS linkage_group_position (
    id INTEGER PRIMARY KEY,
    marker_id INTEGER REFERENCES genetic_marker(id),
    linkage_group_id INTEGER REFERENCES linkage_group(id),
    position REAL
);

CREATE TABLE IF NOT EXISTS qtl (
    id INTEGER PRIMARY KEY,
    identifier TEXT,
    start REAL,
    "end" REAL,
    linkage_group_id INTEGER REFERENCES linkage_group(id)
);

CREATE INDEX IF NOT EXISTS idx_linkage_group_map ON linkage_group(genetic_map_id);
CREATE INDEX IF NOT EXISTS idx_lg_position_group ON linkage_group_position(linkage_group_id);
CREATE INDEX IF NOT EXISTS idx_qtl_group ON qtl(linkage_group_id);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 创建数据模型（幂等）并登记 schema_version
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;
    Ok(())
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();

        assert_eq!(read_schema_version(&conn).unwrap(), None);

        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        assert_eq!(read_schema_version(&conn).unwrap(), Some(CURRENT_SCHEMA_VERSION));
    }
}
