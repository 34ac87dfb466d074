// ==========================================
// 连锁群报告页组件 - SQL 构建工具模块
// ==========================================
// 职责: 将路径查询翻译为参数化 SQL
// 约束: 所有约束值都走参数绑定，防止 SQL 注入
// ==========================================

use crate::query::{Model, PathError, PathQuery, QueryValue, ReferenceKind, ResolvedPath};
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 根表别名
const ROOT_ALIAS: &str = "t0";

/// SQL 查询构建器（流式 API）
///
/// # 示例
/// ```
/// use linkage_tracks::repository::sql_builder::SqlQueryBuilder;
///
/// let sql = SqlQueryBuilder::new("SELECT t0.\"id\"", "qtl t0")
///     .join("INNER JOIN linkage_group t1 ON t1.\"id\" = t0.\"linkage_group_id\"")
///     .where_clause("t1.\"id\" = ?1")
///     .order_by("t0.\"start\" ASC")
///     .build();
///
/// assert!(sql.contains("FROM qtl t0 INNER JOIN linkage_group t1"));
/// assert!(sql.ends_with("WHERE t1.\"id\" = ?1 ORDER BY t0.\"start\" ASC"));
/// ```
#[derive(Debug, Clone)]
pub struct SqlQueryBuilder {
    select_clause: String,
    from_clause: String,
    join_clauses: Vec<String>,
    where_clauses: Vec<String>,
    order_by_clauses: Vec<String>,
}

impl SqlQueryBuilder {
    /// 创建新的 SQL 查询构建器
    pub fn new(select: &str, from: &str) -> Self {
        Self {
            select_clause: select.to_string(),
            from_clause: from.to_string(),
            join_clauses: Vec::new(),
            where_clauses: Vec::new(),
            order_by_clauses: Vec::new(),
        }
    }

    /// 添加 JOIN 子句
    pub fn join(mut self, join: &str) -> Self {
        self.join_clauses.push(join.to_string());
        self
    }

    /// 添加 WHERE 条件（多个条件以 AND 连接）
    pub fn where_clause(mut self, condition: &str) -> Self {
        self.where_clauses.push(condition.to_string());
        self
    }

    /// 追加 ORDER BY 项
    pub fn order_by(mut self, order: &str) -> Self {
        self.order_by_clauses.push(order.to_string());
        self
    }

    /// 构建最终的 SQL 语句
    pub fn build(&self) -> String {
        let mut sql = format!("{} FROM {}", self.select_clause, self.from_clause);

        for join in &self.join_clauses {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clauses.join(" AND "));
        }

        if !self.order_by_clauses.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by_clauses.join(", "));
        }

        sql
    }
}

/// 翻译后的查询
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<QueryValue>,
    pub column_count: usize,
}

/// 连接登记表: 同一路径前缀只连接一次
///
/// 视图列与约束共享前缀时落在同一行上
/// (例如标记位置与其所属连锁群必须是同一条 linkage_group_position 记录)
struct JoinRegistry {
    aliases: Vec<(String, String)>,
    clauses: Vec<String>,
}

impl JoinRegistry {
    fn new() -> Self {
        Self {
            aliases: Vec::new(),
            clauses: Vec::new(),
        }
    }

    fn alias_of(&self, prefix: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, a)| a.as_str())
    }

    /// 登记路径上的全部连接，返回末端表别名
    fn register(&mut self, resolved: &ResolvedPath) -> String {
        let mut parent_alias = ROOT_ALIAS.to_string();

        for step in &resolved.joins {
            if let Some(alias) = self.alias_of(&step.prefix) {
                parent_alias = alias.to_string();
                continue;
            }

            let alias = format!("t{}", self.aliases.len() + 1);
            let on = match step.kind {
                ReferenceKind::Reference { fk_column } => {
                    format!("{}.\"id\" = {}.\"{}\"", alias, parent_alias, fk_column)
                }
                ReferenceKind::Collection { fk_column } => {
                    format!("{}.\"{}\" = {}.\"id\"", alias, fk_column, parent_alias)
                }
            };
            self.clauses
                .push(format!("INNER JOIN {} {} ON {}", step.target_table, alias, on));
            self.aliases.push((step.prefix.clone(), alias.clone()));
            parent_alias = alias;
        }

        parent_alias
    }
}

/// 将路径查询翻译为 SQL
///
/// 说明：
/// - 所有路径必须以同一根类开头
/// - 在显式排序之后追加根表 id 升序，保证相同排序键下结果稳定
pub fn compile_path_query(model: &Model, query: &PathQuery) -> RepositoryResult<CompiledQuery> {
    let root_class = query.root_class().ok_or(RepositoryError::EmptyQuery)?;
    let root = model
        .class(root_class)
        .ok_or_else(|| PathError::UnknownClass(root_class.to_string()))?;

    let mut joins = JoinRegistry::new();
    let mut resolve = |path: &str| -> RepositoryResult<String> {
        let resolved = model.resolve(path)?;
        if resolved.root_class != root.name {
            return Err(PathError::RootMismatch {
                expected: root.name.to_string(),
                path: path.to_string(),
            }
            .into());
        }
        let alias = joins.register(&resolved);
        Ok(format!("{}.\"{}\"", alias, resolved.column))
    };

    let mut columns = Vec::with_capacity(query.views().len());
    for view in query.views() {
        columns.push(resolve(view)?);
    }

    let mut conditions = Vec::with_capacity(query.constraints().len());
    let mut params = Vec::with_capacity(query.constraints().len());
    for constraint in query.constraints() {
        let column = resolve(&constraint.path)?;
        params.push(constraint.value.clone());
        conditions.push(format!("{} = ?{}", column, params.len()));
    }

    let mut orders = Vec::with_capacity(query.order_by().len() + 1);
    for order in query.order_by() {
        orders.push(format!("{} {}", resolve(&order.path)?, order.direction));
    }
    orders.push(format!("{}.\"id\" ASC", ROOT_ALIAS));

    let mut builder = SqlQueryBuilder::new(
        &format!("SELECT {}", columns.join(", ")),
        &format!("{} {}", root.table, ROOT_ALIAS),
    );
    for clause in &joins.clauses {
        builder = builder.join(clause);
    }
    for condition in &conditions {
        builder = builder.where_clause(condition);
    }
    for order in &orders {
        builder = builder.order_by(order);
    }

    Ok(CompiledQuery {
        sql: builder.build(),
        params,
        column_count: columns.len(),
    })
}

// ==========================================
// 单元测试
// ==========================================
