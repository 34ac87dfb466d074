// ==========================================
// 连锁群报告页组件 - 核心库
// ==========================================
// 职责: 查询连锁群、遗传标记与 QTL，聚合为前端轨道 JSON
// 技术栈: Rust + SQLite
// 报告页类型: GeneticMap / LinkageGroup / QTL
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与输出结构
pub mod domain;

// 查询层 - 模型注册表与查询构建
pub mod query;

// 数据仓储层 - 查询执行
pub mod repository;

// 配置层 - 显示配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表）
pub mod db;

// 日志系统
pub mod logging;

// 展示层 - 轨道聚合
pub mod displayer;

// 表单层 - BLAST 导出表单状态
pub mod form;

// 应用层 - 组件装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    BoxItem, GeneticMarker, LinkageGroup, Qtl, ReportSubject, ReportSubjectKind, Track,
    TrackDisplay, TrackDocument, TriangleItem,
};

pub use query::{Model, OrderDirection, PathQuery};

pub use repository::{QueryExecutor, RepositoryError, RepositoryResult, SqliteQueryExecutor};

pub use config::{ConfigManager, DisplayConfig};

pub use displayer::{
    AttributeValue, DisplayerError, DisplayerResult, LinkageGroupDisplayer, ReportContext,
    ReportObject,
};

pub use form::{SequenceBlastForm, TableExportForm};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 组件名称
pub const APP_NAME: &str = "连锁群报告页组件";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
