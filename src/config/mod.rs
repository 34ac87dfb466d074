// ==========================================
// 连锁群报告页组件 - 配置层
// ==========================================
// 职责: 轨道显示配置，支持 global / 报告页类型两级覆写
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod display_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, ConfigScope};
pub use display_config::DisplayConfig;
