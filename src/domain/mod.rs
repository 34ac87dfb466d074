// ==========================================
// 连锁群报告页组件 - 领域模型层
// ==========================================
// 职责: 定义只读实体、报告页主体、轨道输出结构
// 红线: 不含数据访问逻辑
// ==========================================

pub mod genetics;
pub mod track;
pub mod types;

// 重导出核心类型
pub use genetics::{GeneticMarker, LinkageGroup, LinkageGroupFeatures, Qtl};
pub use track::{BoxItem, Track, TrackDisplay, TrackDocument, TriangleItem};
pub use types::{ReportSubject, ReportSubjectKind};
