// ==========================================
// 连锁群报告页组件 - 查询层
// ==========================================
// 职责: 模型注册表 + 路径查询描述 + 三类查询构建
// 约束: 不做 I/O
// ==========================================

pub mod builders;
pub mod model;
pub mod path_query;

pub use builders::{genetic_marker_query, linkage_group_query, qtl_query};
pub use model::{ClassDescriptor, JoinStep, Model, PathError, ReferenceKind, ResolvedPath};
pub use path_query::{Constraint, OrderBy, OrderDirection, PathQuery, QueryValue};
