// ==========================================
// 连锁群报告页组件 - 轨道输出结构
// ==========================================
// 前端契约 (canvasXpress 风格):
//   {"tracks": [ {"type": "box"|"triangle", "data": [ item, ... ]}, ... ]}
// box 项:      {"id", "key", "fill", "outline", "data": [[num, num]]}
// triangle 项: {"id", "key", "fill", "outline", "offset": num}
// ==========================================

use serde::{Deserialize, Serialize};

/// box 轨道数据项（连锁群、QTL）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxItem {
    /// 显示标识（前端要求字段名为 id）
    pub id: String,
    /// 实体代理键，用于链接
    pub key: i64,
    pub fill: String,
    pub outline: String,
    /// 区间列表，目前总是单个 [起点, 终点]
    pub data: Vec<[f64; 2]>,
}

/// triangle 轨道数据项（遗传标记）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleItem {
    pub id: String,
    pub key: i64,
    pub fill: String,
    pub outline: String,
    pub offset: f64,
}

/// 渲染轨道
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Track {
    Box { data: Vec<BoxItem> },
    Triangle { data: Vec<TriangleItem> },
}

impl Track {
    /// 轨道类型标签
    pub fn type_tag(&self) -> &'static str {
        match self {
            Track::Box { .. } => "box",
            Track::Triangle { .. } => "triangle",
        }
    }

    /// 数据项数量
    pub fn len(&self) -> usize {
        match self {
            Track::Box { data } => data.len(),
            Track::Triangle { data } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 顶层文档，整个轨道数组挂在 tracks 键下（顺序即渲染顺序）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackDocument {
    pub tracks: Vec<Track>,
}

impl TrackDocument {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// 展示输出: 交给渲染层的三个值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDisplay {
    /// {"tracks": [...]} JSON 字符串
    pub tracks_json: String,
    /// 连锁群数量
    pub tracks_count: usize,
    /// 最大连锁群长度
    pub max_lg_length: f64,
}
