// ==========================================
// 连锁群报告页组件 - 展示层
// ==========================================
// 职责: 报告页主体 → 查询 → 轨道聚合 → 上下文属性
// 依赖: QueryExecutor（显式注入）、DisplayConfig
// ==========================================

pub mod context;
pub mod error;
pub mod linkage_group_displayer;

pub use context::{AttributeValue, ReportContext, ReportObject, MAX_LG_LENGTH, TRACKS_COUNT, TRACKS_JSON};
pub use error::{DisplayerError, DisplayerResult};
pub use linkage_group_displayer::{
    build_track_document, get_results, max_linkage_group_length, LinkageGroupDisplayer,
};
