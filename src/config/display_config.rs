// ==========================================
// 连锁群报告页组件 - 显示配置
// ==========================================
// 默认配色: 连锁群 purple / 标记 darkred / QTL yellow / 轮廓 black
// ==========================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_LINKAGE_GROUP_FILL: &str = "purple";
pub const DEFAULT_MARKER_FILL: &str = "darkred";
pub const DEFAULT_QTL_FILL: &str = "yellow";
pub const DEFAULT_OUTLINE: &str = "black";

/// 轨道配色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub linkage_group_fill: String,
    pub marker_fill: String,
    pub qtl_fill: String,
    pub outline: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            linkage_group_fill: DEFAULT_LINKAGE_GROUP_FILL.to_string(),
            marker_fill: DEFAULT_MARKER_FILL.to_string(),
            qtl_fill: DEFAULT_QTL_FILL.to_string(),
            outline: DEFAULT_OUTLINE.to_string(),
        }
    }
}
