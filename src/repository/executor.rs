// ==========================================
// 连锁群报告页组件 - 查询执行接口
// ==========================================
// 职责: 定义查询执行器 trait 与只进结果集
// 说明: 执行器作为显式依赖注入展示层，不使用全局实例
// ==========================================

use crate::query::PathQuery;
use crate::repository::error::RepositoryResult;
use std::fmt;
use thiserror::Error;

/// 查询执行器
///
/// 输入结构化查询描述，返回按查询排序的只进结果行序列
pub trait QueryExecutor: Send + Sync {
    fn execute(&self, query: &PathQuery) -> RepositoryResult<ExportResults>;
}

/// 单元格值
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl ResultValue {
    fn type_name(&self) -> &'static str {
        match self {
            ResultValue::Null => "null",
            ResultValue::Integer(_) => "integer",
            ResultValue::Real(_) => "real",
            ResultValue::Text(_) => "text",
            ResultValue::Blob(_) => "blob",
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Null => write!(f, "NULL"),
            ResultValue::Integer(v) => write!(f, "{}", v),
            ResultValue::Real(v) => write!(f, "{}", v),
            ResultValue::Text(v) => write!(f, "{}", v),
            ResultValue::Blob(v) => write!(f, "<blob {} bytes>", v.len()),
        }
    }
}

/// 按位置读取字段的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("列 {index} 为空")]
    Null { index: usize },

    #[error("列 {index} 超出范围 (共 {len} 列)")]
    OutOfRange { index: usize, len: usize },

    #[error("列 {index} 类型不匹配: expected={expected}, found={found}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    /// 出错的列位置
    pub fn index(&self) -> usize {
        match self {
            FieldError::Null { index }
            | FieldError::OutOfRange { index, .. }
            | FieldError::TypeMismatch { index, .. } => *index,
        }
    }
}

/// 结果行，列顺序与查询视图列一致
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    values: Vec<ResultValue>,
}

impl ResultRow {
    pub fn new(values: Vec<ResultValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ResultValue, FieldError> {
        self.values.get(index).ok_or(FieldError::OutOfRange {
            index,
            len: self.values.len(),
        })
    }

    pub fn get_i64(&self, index: usize) -> Result<i64, FieldError> {
        match self.get(index)? {
            ResultValue::Integer(v) => Ok(*v),
            ResultValue::Null => Err(FieldError::Null { index }),
            other => Err(FieldError::TypeMismatch {
                index,
                expected: "integer",
                found: other.type_name(),
            }),
        }
    }

    /// 读取浮点数；整数值按浮点数返回
    pub fn get_f64(&self, index: usize) -> Result<f64, FieldError> {
        match self.get(index)? {
            ResultValue::Real(v) => Ok(*v),
            ResultValue::Integer(v) => Ok(*v as f64),
            ResultValue::Null => Err(FieldError::Null { index }),
            other => Err(FieldError::TypeMismatch {
                index,
                expected: "real",
                found: other.type_name(),
            }),
        }
    }

    pub fn get_str(&self, index: usize) -> Result<&str, FieldError> {
        match self.get(index)? {
            ResultValue::Text(v) => Ok(v.as_str()),
            ResultValue::Null => Err(FieldError::Null { index }),
            other => Err(FieldError::TypeMismatch {
                index,
                expected: "text",
                found: other.type_name(),
            }),
        }
    }
}

/// 只进结果集
#[derive(Debug)]
pub struct ExportResults {
    views: Vec<String>,
    rows: std::vec::IntoIter<ResultRow>,
}

impl ExportResults {
    pub fn new(views: Vec<String>, rows: Vec<ResultRow>) -> Self {
        Self {
            views,
            rows: rows.into_iter(),
        }
    }

    /// 结果列对应的视图路径
    pub fn views(&self) -> &[String] {
        &self.views
    }

    /// 指定列的视图路径（用于错误信息）
    pub fn view(&self, index: usize) -> &str {
        self.views.get(index).map(String::as_str).unwrap_or("?")
    }
}

impl Iterator for ExportResults {
    type Item = ResultRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ResultRow {
        ResultRow::new(vec![
            ResultValue::Integer(7),
            ResultValue::Text("LG7".to_string()),
            ResultValue::Real(42.5),
            ResultValue::Null,
            ResultValue::Integer(3),
        ])
    }

    #[test]
    fn test_typed_access() {
        let row = row();
        assert_eq!(row.get_i64(0), Ok(7));
        assert_eq!(row.get_str(1), Ok("LG7"));
        assert_eq!(row.get_f64(2), Ok(42.5));
        assert_eq!(row.get_f64(4), Ok(3.0));
    }

    #[test]
    fn test_access_errors() {
        let row = row();
        assert_eq!(row.get_f64(3), Err(FieldError::Null { index: 3 }));
        assert_eq!(row.get_i64(9), Err(FieldError::OutOfRange { index: 9, len: 5 }));
        assert_eq!(
            row.get_i64(1),
            Err(FieldError::TypeMismatch {
                index: 1,
                expected: "integer",
                found: "text"
            })
        );
    }

    #[test]
    fn test_export_results_is_forward_only() {
        let mut results = ExportResults::new(
            vec!["QTL.id".to_string()],
            vec![
                ResultRow::new(vec![ResultValue::Integer(1)]),
                ResultRow::new(vec![ResultValue::Integer(2)]),
            ],
        );
        assert_eq!(results.view(0), "QTL.id");
        assert_eq!(results.view(5), "?");
        assert_eq!(results.next().unwrap().get_i64(0), Ok(1));
        assert_eq!(results.next().unwrap().get_i64(0), Ok(2));
        assert!(results.next().is_none());
    }
}
