// ==========================================
// 连锁群报告页组件 - 展示层错误类型
// ==========================================
// 分类:
// - 数据读取失败: 本地不可恢复，携带原始原因交给上层请求处理
// - 字段为空/类型错误: 前置条件违反，快速失败
// - 不支持的报告页类型: 调用方必须拒绝
// 说明: "无数据" 不是错误，见 LinkageGroupDisplayer::build_tracks
// ==========================================

use crate::repository::{FieldError, RepositoryError};
use thiserror::Error;

/// 展示层错误类型
#[derive(Error, Debug)]
pub enum DisplayerError {
    #[error("数据读取失败: {0}")]
    DataRetrieval(#[source] RepositoryError),

    #[error("字段为空: {path}")]
    MissingField { path: String },

    #[error("字段读取失败 ({path}): {source}")]
    InvalidField {
        path: String,
        #[source]
        source: FieldError,
    },

    #[error("不支持的报告页类型: {0}")]
    UnsupportedSubjectKind(String),

    #[error("轨道 JSON 序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DisplayerError {
    /// 按视图路径包装字段读取错误
    pub(crate) fn from_field(views: &[String], err: FieldError) -> Self {
        let index = err.index();
        let path = views
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("#{}", index));

        match err {
            FieldError::Null { .. } => DisplayerError::MissingField { path },
            other => DisplayerError::InvalidField {
                path,
                source: other,
            },
        }
    }
}

/// Result 类型别名
pub type DisplayerResult<T> = Result<T, DisplayerError>;
