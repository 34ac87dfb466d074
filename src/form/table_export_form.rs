// ==========================================
// 连锁群报告页组件 - 表格导出表单
// ==========================================
// 职责: 结果表导出的表单状态（格式、列路径、表头）
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认导出格式
pub const DEFAULT_EXPORT_FORMAT: &str = "tab";

/// 表格导出表单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExportForm {
    /// 导出格式 (tab / csv / fasta ...)
    pub format: String,
    /// 来源结果表名
    pub table: Option<String>,
    /// 导出的列路径
    pub paths: Vec<String>,
    pub include_headers: bool,
    pub gzip: bool,
}

impl TableExportForm {
    pub fn new() -> Self {
        Self {
            format: DEFAULT_EXPORT_FORMAT.to_string(),
            table: None,
            paths: Vec::new(),
            include_headers: false,
            gzip: false,
        }
    }

    /// 恢复初始状态
    pub fn initialise(&mut self) {
        *self = Self::new();
    }

    /// 以逗号分隔的列路径
    pub fn paths_string(&self) -> String {
        self.paths.join(",")
    }

    /// 从逗号分隔字符串设置列路径（忽略空白项）
    pub fn set_paths_string(&mut self, paths: &str) {
        self.paths = paths
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }
}

impl Default for TableExportForm {
    fn default() -> Self {
        Self::new()
    }
}
