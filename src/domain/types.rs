// ==========================================
// 连锁群报告页组件 - 领域类型定义
// ==========================================
// 报告页主体: 页面所展示对象的类型与 ID
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 报告页主体类型 (Report Subject Kind)
// ==========================================
// 封闭枚举: 未知类名由调用方拒绝，不会构造出无过滤条件的查询
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportSubjectKind {
    GeneticMap,   // 遗传图谱
    LinkageGroup, // 连锁群
    #[serde(rename = "QTL")]
    Qtl,          // 数量性状位点
}

impl ReportSubjectKind {
    /// 从数据模型类名解析（大小写敏感，与模型类名一致）
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        match class_name {
            "GeneticMap" => Some(ReportSubjectKind::GeneticMap),
            "LinkageGroup" => Some(ReportSubjectKind::LinkageGroup),
            "QTL" => Some(ReportSubjectKind::Qtl),
            _ => None,
        }
    }

    /// 数据模型类名
    pub fn class_name(&self) -> &'static str {
        match self {
            ReportSubjectKind::GeneticMap => "GeneticMap",
            ReportSubjectKind::LinkageGroup => "LinkageGroup",
            ReportSubjectKind::Qtl => "QTL",
        }
    }
}

impl fmt::Display for ReportSubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

// ==========================================
// 报告页主体 (Report Subject)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSubject {
    pub id: i64,                 // 主体代理键
    pub kind: ReportSubjectKind, // 主体类型
}

impl ReportSubject {
    pub fn new(id: i64, kind: ReportSubjectKind) -> Self {
        Self { id, kind }
    }

    pub fn genetic_map(id: i64) -> Self {
        Self::new(id, ReportSubjectKind::GeneticMap)
    }

    pub fn linkage_group(id: i64) -> Self {
        Self::new(id, ReportSubjectKind::LinkageGroup)
    }

    pub fn qtl(id: i64) -> Self {
        Self::new(id, ReportSubjectKind::Qtl)
    }
}

impl fmt::Display for ReportSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_class_name() {
        assert_eq!(
            ReportSubjectKind::from_class_name("GeneticMap"),
            Some(ReportSubjectKind::GeneticMap)
        );
        assert_eq!(
            ReportSubjectKind::from_class_name("LinkageGroup"),
            Some(ReportSubjectKind::LinkageGroup)
        );
        assert_eq!(ReportSubjectKind::from_class_name("QTL"), Some(ReportSubjectKind::Qtl));
        assert_eq!(ReportSubjectKind::from_class_name("Gene"), None);
        assert_eq!(ReportSubjectKind::from_class_name("qtl"), None);
    }

    #[test]
    fn test_class_name_round_trip() {
        for kind in [
            ReportSubjectKind::GeneticMap,
            ReportSubjectKind::LinkageGroup,
            ReportSubjectKind::Qtl,
        ] {
            assert_eq!(ReportSubjectKind::from_class_name(kind.class_name()), Some(kind));
        }
    }

    #[test]
    fn test_subject_display() {
        assert_eq!(ReportSubject::qtl(42).to_string(), "QTL:42");
    }
}
