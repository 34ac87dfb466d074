// ==========================================
// 连锁群报告页组件 - 查询构建
// ==========================================
// 职责: 构建连锁群 / 遗传标记 / QTL 三类查询
// 约束: 纯函数，无 I/O
// ==========================================

use crate::domain::{ReportSubject, ReportSubjectKind};
use crate::query::path_query::{OrderDirection, PathQuery};

/// 连锁群查询的视图列 (id, identifier, length, number)
pub const LINKAGE_GROUP_VIEWS: [&str; 4] = [
    "LinkageGroup.id",
    "LinkageGroup.identifier",
    "LinkageGroup.length",
    "LinkageGroup.number",
];

/// 遗传标记查询的视图列 (id, secondaryIdentifier, position)
pub const GENETIC_MARKER_VIEWS: [&str; 3] = [
    "GeneticMarker.id",
    "GeneticMarker.secondaryIdentifier",
    "GeneticMarker.linkageGroupPositions.position",
];

/// QTL 查询的视图列 (id, identifier, start, end)
pub const QTL_VIEWS: [&str; 4] = ["QTL.id", "QTL.identifier", "QTL.start", "QTL.end"];

/// 按报告页主体类型返回过滤路径
fn linkage_group_filter_path(kind: ReportSubjectKind) -> &'static str {
    match kind {
        ReportSubjectKind::GeneticMap => "LinkageGroup.geneticMap.id",
        ReportSubjectKind::Qtl => "LinkageGroup.qtls.id",
        ReportSubjectKind::LinkageGroup => "LinkageGroup.id",
    }
}

/// 构建连锁群查询
///
/// - GeneticMap: 该图谱下的所有连锁群
/// - QTL: 该 QTL 所在的连锁群
/// - LinkageGroup: 该连锁群本身
///
/// 结果按 number 升序
pub fn linkage_group_query(subject: &ReportSubject) -> PathQuery {
    PathQuery::new()
        .add_views(&LINKAGE_GROUP_VIEWS)
        .add_constraint(linkage_group_filter_path(subject.kind), subject.id)
        .add_order_by("LinkageGroup.number", OrderDirection::Asc)
}

/// 构建遗传标记查询（限定在指定连锁群上的位置），按 position 升序
pub fn genetic_marker_query(linkage_group_id: i64) -> PathQuery {
    PathQuery::new()
        .add_views(&GENETIC_MARKER_VIEWS)
        .add_constraint(
            "GeneticMarker.linkageGroupPositions.linkageGroup.id",
            linkage_group_id,
        )
        .add_order_by(
            "GeneticMarker.linkageGroupPositions.position",
            OrderDirection::Asc,
        )
}

/// 构建 QTL 查询，按 start 升序
pub fn qtl_query(linkage_group_id: i64) -> PathQuery {
    PathQuery::new()
        .add_views(&QTL_VIEWS)
        .add_constraint("QTL.linkageGroup.id", linkage_group_id)
        .add_order_by("QTL.start", OrderDirection::Asc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::path_query::QueryValue;
    use crate::query::Model;

    #[test]
    fn test_linkage_group_query_filters_by_kind() {
        let cases = [
            (ReportSubject::genetic_map(5), "LinkageGroup.geneticMap.id"),
            (ReportSubject::qtl(9), "LinkageGroup.qtls.id"),
            (ReportSubject::linkage_group(7), "LinkageGroup.id"),
        ];

        for (subject, expected_path) in cases {
            let query = linkage_group_query(&subject);
            assert_eq!(query.views(), &LINKAGE_GROUP_VIEWS);
            assert_eq!(query.constraints().len(), 1);
            assert_eq!(query.constraints()[0].path, expected_path);
            assert_eq!(query.constraints()[0].value, QueryValue::Integer(subject.id));
            assert_eq!(query.order_by()[0].path, "LinkageGroup.number");
            assert_eq!(query.order_by()[0].direction, OrderDirection::Asc);
        }
    }

    #[test]
    fn test_marker_query_shares_position_path() {
        let query = genetic_marker_query(11);
        assert_eq!(query.root_class(), Some("GeneticMarker"));
        assert_eq!(
            query.constraints()[0].path,
            "GeneticMarker.linkageGroupPositions.linkageGroup.id"
        );
        assert_eq!(query.constraints()[0].value, QueryValue::Integer(11));
        assert_eq!(
            query.order_by()[0].path,
            "GeneticMarker.linkageGroupPositions.position"
        );
    }

    #[test]
    fn test_qtl_query() {
        let query = qtl_query(3);
        assert_eq!(query.views(), &QTL_VIEWS);
        assert_eq!(query.constraints()[0].path, "QTL.linkageGroup.id");
        assert_eq!(query.order_by()[0].path, "QTL.start");
    }

    #[test]
    fn test_all_paths_resolve_against_model() {
        let model = Model::genetic_map();
        let queries = [
            linkage_group_query(&ReportSubject::genetic_map(1)),
            linkage_group_query(&ReportSubject::qtl(1)),
            linkage_group_query(&ReportSubject::linkage_group(1)),
            genetic_marker_query(1),
            qtl_query(1),
        ];

        for query in &queries {
            for view in query.views() {
                assert!(model.resolve(view).is_ok(), "视图列无法解析: {}", view);
            }
            for c in query.constraints() {
                assert!(model.resolve(&c.path).is_ok(), "约束路径无法解析: {}", c.path);
            }
            for o in query.order_by() {
                assert!(model.resolve(&o.path).is_ok(), "排序路径无法解析: {}", o.path);
            }
        }
    }
}
