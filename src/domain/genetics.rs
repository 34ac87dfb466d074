// ==========================================
// 连锁群报告页组件 - 遗传学实体
// ==========================================
// 只读投影: 每次展示时重新查询，聚合完成即丢弃
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// LinkageGroup - 连锁群
// ==========================================
// 排序: 按 number 升序（全基因组顺序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkageGroup {
    pub id: i64,            // 代理键
    pub identifier: String, // 显示标识
    pub length: f64,        // 长度 (图距单位, 非负)
    pub number: i64,        // 序号
}

// ==========================================
// GeneticMarker - 遗传标记
// ==========================================
// position 只相对于查询时所在的连锁群有意义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticMarker {
    pub id: i64,
    pub identifier: String, // secondaryIdentifier
    pub position: f64,
}

// ==========================================
// Qtl - 数量性状位点
// ==========================================
// start <= end 为预期，但不做校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qtl {
    pub id: i64,
    pub identifier: String,
    pub start: f64,
    pub end: f64,
}

/// 单个连锁群及其下属标记与 QTL（聚合中间结果）
#[derive(Debug, Clone, PartialEq)]
pub struct LinkageGroupFeatures {
    pub linkage_group: LinkageGroup,
    pub markers: Vec<GeneticMarker>, // 按 position 升序
    pub qtls: Vec<Qtl>,              // 按 start 升序
}
