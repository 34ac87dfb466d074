// ==========================================
// 连锁群报告页组件 - 连锁群轨道展示
// ==========================================
// 职责: 按报告页主体查询连锁群，再逐个连锁群查询标记与 QTL，
//       输出 {"tracks": [...]} 以及连锁群数量、最大长度
// 报告页类型: GeneticMap / LinkageGroup / QTL
// 约束: 单线程顺序执行；查询一次一条（1 + 2N）
// ==========================================

use crate::config::DisplayConfig;
use crate::displayer::context::{ReportContext, ReportObject};
use crate::displayer::error::{DisplayerError, DisplayerResult};
use crate::domain::{
    BoxItem, GeneticMarker, LinkageGroup, LinkageGroupFeatures, Qtl, ReportSubject,
    ReportSubjectKind, Track, TrackDisplay, TrackDocument, TriangleItem,
};
use crate::query::{genetic_marker_query, linkage_group_query, qtl_query, PathQuery};
use crate::repository::{ExportResults, FieldError, QueryExecutor, ResultRow};
use std::collections::HashMap;
use std::sync::Arc;

/// 执行查询；任何存储层失败都包装为数据读取错误，不重试、不返回部分结果
pub fn get_results(executor: &dyn QueryExecutor, query: &PathQuery) -> DisplayerResult<ExportResults> {
    executor.execute(query).map_err(|e| {
        tracing::error!(query = %query, error = %e, "数据读取失败");
        DisplayerError::DataRetrieval(e)
    })
}

/// 读取全部结果行，按 id（第 0 列）去重
///
/// 重复 id 保留首次出现的位置，内容以最后一行为准
fn collect_rows<T>(
    results: ExportResults,
    parse: impl Fn(&ResultRow, &[String]) -> DisplayerResult<T>,
) -> DisplayerResult<Vec<T>> {
    let views = results.views().to_vec();
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut items = Vec::new();

    for row in results {
        let id = row
            .get_i64(0)
            .map_err(|e| DisplayerError::from_field(&views, e))?;
        let item = parse(&row, &views)?;
        match slots.get(&id) {
            Some(&slot) => {
                tracing::debug!(id, view = views.first().map(String::as_str).unwrap_or("?"), "重复行覆盖先前的值");
                items[slot] = item;
            }
            None => {
                slots.insert(id, items.len());
                items.push(item);
            }
        }
    }

    Ok(items)
}

fn linkage_group_from_row(row: &ResultRow, views: &[String]) -> DisplayerResult<LinkageGroup> {
    let field = |e: FieldError| DisplayerError::from_field(views, e);
    Ok(LinkageGroup {
        id: row.get_i64(0).map_err(field)?,
        identifier: row.get_str(1).map_err(field)?.to_string(),
        length: row.get_f64(2).map_err(field)?,
        number: row.get_i64(3).map_err(field)?,
    })
}

fn marker_from_row(row: &ResultRow, views: &[String]) -> DisplayerResult<GeneticMarker> {
    let field = |e: FieldError| DisplayerError::from_field(views, e);
    Ok(GeneticMarker {
        id: row.get_i64(0).map_err(field)?,
        identifier: row.get_str(1).map_err(field)?.to_string(),
        position: row.get_f64(2).map_err(field)?,
    })
}

fn qtl_from_row(row: &ResultRow, views: &[String]) -> DisplayerResult<Qtl> {
    let field = |e: FieldError| DisplayerError::from_field(views, e);
    Ok(Qtl {
        id: row.get_i64(0).map_err(field)?,
        identifier: row.get_str(1).map_err(field)?.to_string(),
        start: row.get_f64(2).map_err(field)?,
        end: row.get_f64(3).map_err(field)?,
    })
}

/// 组装轨道文档: 每个连锁群依次输出 连锁群 box、标记 triangle、QTL box
///
/// 标记或 QTL 为空时仍输出空轨道，保证轨道数 = 3 × 连锁群数
pub fn build_track_document(groups: &[LinkageGroupFeatures], config: &DisplayConfig) -> TrackDocument {
    let mut tracks = Vec::with_capacity(groups.len() * 3);

    for group in groups {
        let lg = &group.linkage_group;
        tracks.push(Track::Box {
            data: vec![BoxItem {
                id: lg.identifier.clone(),
                key: lg.id,
                fill: config.linkage_group_fill.clone(),
                outline: config.outline.clone(),
                data: vec![[0.0, lg.length]],
            }],
        });

        tracks.push(Track::Triangle {
            data: group
                .markers
                .iter()
                .map(|m| TriangleItem {
                    id: m.identifier.clone(),
                    key: m.id,
                    fill: config.marker_fill.clone(),
                    outline: config.outline.clone(),
                    offset: m.position,
                })
                .collect(),
        });

        // QTL 区间原样输出，start > end 时也不调换
        tracks.push(Track::Box {
            data: group
                .qtls
                .iter()
                .map(|q| BoxItem {
                    id: q.identifier.clone(),
                    key: q.id,
                    fill: config.qtl_fill.clone(),
                    outline: config.outline.clone(),
                    data: vec![[q.start, q.end]],
                })
                .collect(),
        });
    }

    TrackDocument { tracks }
}

/// 最大连锁群长度（无连锁群时为 0.0）
pub fn max_linkage_group_length(groups: &[LinkageGroup]) -> f64 {
    groups
        .iter()
        .map(|lg| lg.length)
        .fold(0.0, |max, length| if length > max { length } else { max })
}

// ==========================================
// LinkageGroupDisplayer - 连锁群轨道展示
// ==========================================
pub struct LinkageGroupDisplayer {
    executor: Arc<dyn QueryExecutor>,
    config: DisplayConfig,
}

impl LinkageGroupDisplayer {
    pub fn new(executor: Arc<dyn QueryExecutor>, config: DisplayConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// 查询报告页主体对应的连锁群（按 number 升序）
    pub fn fetch_linkage_groups(&self, subject: &ReportSubject) -> DisplayerResult<Vec<LinkageGroup>> {
        let results = get_results(self.executor.as_ref(), &linkage_group_query(subject))?;
        collect_rows(results, linkage_group_from_row)
    }

    /// 查询连锁群上的遗传标记（按 position 升序）
    pub fn fetch_markers(&self, linkage_group_id: i64) -> DisplayerResult<Vec<GeneticMarker>> {
        let results = get_results(self.executor.as_ref(), &genetic_marker_query(linkage_group_id))?;
        collect_rows(results, marker_from_row)
    }

    /// 查询连锁群上的 QTL（按 start 升序）
    pub fn fetch_qtls(&self, linkage_group_id: i64) -> DisplayerResult<Vec<Qtl>> {
        let results = get_results(self.executor.as_ref(), &qtl_query(linkage_group_id))?;
        collect_rows(results, qtl_from_row)
    }

    /// 构建轨道数据
    ///
    /// # 返回
    /// - Ok(Some(TrackDisplay)): 至少找到一个连锁群
    /// - Ok(None): 没有匹配的连锁群（不是错误，调用方不应写入任何属性）
    /// - Err: 数据读取失败或字段不满足前置条件
    pub fn build_tracks(&self, subject: &ReportSubject) -> DisplayerResult<Option<TrackDisplay>> {
        let linkage_groups = self.fetch_linkage_groups(subject)?;
        if linkage_groups.is_empty() {
            tracing::info!(subject = %subject, "未找到连锁群，跳过轨道展示");
            return Ok(None);
        }
        let max_lg_length = max_linkage_group_length(&linkage_groups);

        // 先查全部连锁群的标记，再查全部连锁群的 QTL
        let mut markers = Vec::with_capacity(linkage_groups.len());
        for lg in &linkage_groups {
            markers.push(self.fetch_markers(lg.id)?);
        }
        let mut qtls = Vec::with_capacity(linkage_groups.len());
        for lg in &linkage_groups {
            qtls.push(self.fetch_qtls(lg.id)?);
        }

        let groups: Vec<LinkageGroupFeatures> = linkage_groups
            .into_iter()
            .zip(markers)
            .zip(qtls)
            .map(|((linkage_group, markers), qtls)| LinkageGroupFeatures {
                linkage_group,
                markers,
                qtls,
            })
            .collect();

        let document = build_track_document(&groups, &self.config);
        let tracks_json = document.to_json()?;

        tracing::info!(
            subject = %subject,
            linkage_groups = groups.len(),
            tracks = document.tracks.len(),
            max_lg_length,
            "轨道数据已生成"
        );

        Ok(Some(TrackDisplay {
            tracks_json,
            tracks_count: groups.len(),
            max_lg_length,
        }))
    }

    /// 报告页展示入口
    ///
    /// 按报告页对象的类名确定主体类型；未知类名直接拒绝。
    /// 找到连锁群时向上下文写入 tracksCount / maxLGLength / tracksJSON，否则不写入。
    pub fn display(&self, report: &ReportObject, ctx: &mut ReportContext) -> DisplayerResult<()> {
        let kind = match ReportSubjectKind::from_class_name(&report.class_name) {
            Some(kind) => kind,
            None => {
                tracing::warn!(class_name = %report.class_name, id = report.id, "不支持的报告页类型");
                return Err(DisplayerError::UnsupportedSubjectKind(report.class_name.clone()));
            }
        };

        let subject = ReportSubject::new(report.id, kind);
        if let Some(display) = self.build_tracks(&subject)? {
            ctx.attach_tracks(&display);
        }
        Ok(())
    }
}
