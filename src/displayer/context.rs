// ==========================================
// 连锁群报告页组件 - 报告页上下文
// ==========================================
// ReportObject: 触发展示的报告页主体（只读）
// ReportContext: 输出槽，展示层只向其写入属性
// ==========================================

use crate::domain::TrackDisplay;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 属性名: 连锁群数量
pub const TRACKS_COUNT: &str = "tracksCount";
/// 属性名: 最大连锁群长度
pub const MAX_LG_LENGTH: &str = "maxLGLength";
/// 属性名: 轨道 JSON
pub const TRACKS_JSON: &str = "tracksJSON";

/// 报告页对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportObject {
    pub id: i64,
    /// 数据模型类名 (例如 "GeneticMap")
    pub class_name: String,
}

impl ReportObject {
    pub fn new(id: i64, class_name: &str) -> Self {
        Self {
            id,
            class_name: class_name.to_string(),
        }
    }
}

/// 属性值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

/// 报告页上下文（请求级属性槽）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    attributes: BTreeMap<String, AttributeValue>,
}

impl ReportContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, name: &str, value: AttributeValue) {
        self.attributes.insert(name.to_string(), value);
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// 写入轨道展示的三个属性
    pub fn attach_tracks(&mut self, display: &TrackDisplay) {
        self.set_attribute(
            TRACKS_COUNT,
            AttributeValue::Integer(display.tracks_count as i64),
        );
        self.set_attribute(MAX_LG_LENGTH, AttributeValue::Real(display.max_lg_length));
        self.set_attribute(TRACKS_JSON, AttributeValue::Text(display.tracks_json.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_tracks_sets_three_attributes() {
        let mut ctx = ReportContext::new();
        assert!(ctx.is_empty());

        ctx.attach_tracks(&TrackDisplay {
            tracks_json: r#"{"tracks":[]}"#.to_string(),
            tracks_count: 2,
            max_lg_length: 120.5,
        });

        assert_eq!(ctx.attributes().len(), 3);
        assert_eq!(ctx.get_attribute(TRACKS_COUNT).and_then(|v| v.as_i64()), Some(2));
        assert_eq!(ctx.get_attribute(MAX_LG_LENGTH).and_then(|v| v.as_f64()), Some(120.5));
        assert_eq!(
            ctx.get_attribute(TRACKS_JSON).and_then(|v| v.as_str()),
            Some(r#"{"tracks":[]}"#)
        );
    }
}
