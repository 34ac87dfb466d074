// ==========================================
// 连锁群报告页组件 - 路径查询描述
// ==========================================
// 职责: 结构化描述一次查询（视图列、等值约束、排序）
// 约束: 纯数据结构，不做 I/O；执行由 QueryExecutor 负责
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// 约束值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Integer(v) => write!(f, "{}", v),
            QueryValue::Text(v) => write!(f, "'{}'", v),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Integer(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Text(v.to_string())
    }
}

/// 等值约束: path = value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub path: String,
    pub value: QueryValue,
}

/// 排序指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub path: String,
    pub direction: OrderDirection,
}

/// 路径查询（流式 API）
///
/// # 示例
/// ```
/// use linkage_tracks::query::{OrderDirection, PathQuery};
///
/// let query = PathQuery::new()
///     .add_views(&["QTL.id", "QTL.identifier"])
///     .add_constraint("QTL.linkageGroup.id", 7_i64)
///     .add_order_by("QTL.start", OrderDirection::Asc);
///
/// assert_eq!(query.views().len(), 2);
/// assert_eq!(query.constraints()[0].path, "QTL.linkageGroup.id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathQuery {
    views: Vec<String>,
    constraints: Vec<Constraint>,
    order_by: Vec<OrderBy>,
}

impl PathQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加单个视图列
    pub fn add_view(mut self, path: &str) -> Self {
        self.views.push(path.to_string());
        self
    }

    /// 批量添加视图列（顺序即结果行的列顺序）
    pub fn add_views(mut self, paths: &[&str]) -> Self {
        self.views.extend(paths.iter().map(|p| p.to_string()));
        self
    }

    /// 添加等值约束
    pub fn add_constraint(mut self, path: &str, value: impl Into<QueryValue>) -> Self {
        self.constraints.push(Constraint {
            path: path.to_string(),
            value: value.into(),
        });
        self
    }

    /// 添加排序
    pub fn add_order_by(mut self, path: &str, direction: OrderDirection) -> Self {
        self.order_by.push(OrderBy {
            path: path.to_string(),
            direction,
        });
        self
    }

    pub fn views(&self) -> &[String] {
        &self.views
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn order_by(&self) -> &[OrderBy] {
        &self.order_by
    }

    /// 根类名（取第一个视图列的首段）
    pub fn root_class(&self) -> Option<&str> {
        self.views
            .first()
            .and_then(|v| v.split('.').next())
            .filter(|s| !s.is_empty())
    }
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {}", self.views.join(", "))?;
        if !self.constraints.is_empty() {
            let constraints: Vec<String> = self
                .constraints
                .iter()
                .map(|c| format!("{} = {}", c.path, c.value))
                .collect();
            write!(f, " WHERE {}", constraints.join(" AND "))?;
        }
        if !self.order_by.is_empty() {
            let order: Vec<String> = self
                .order_by
                .iter()
                .map(|o| format!("{} {}", o.path, o.direction))
                .collect();
            write!(f, " ORDER BY {}", order.join(", "))?;
        }
        Ok(())
    }
}
