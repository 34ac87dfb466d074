// ==========================================
// 连锁群报告页组件 - 应用层
// ==========================================
// 职责: 组装执行器、配置管理器与展示组件
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_db_path, AppState};
