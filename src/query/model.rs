// ==========================================
// 连锁群报告页组件 - 数据模型注册表
// ==========================================
// 职责: 描述类 → 表、字段 → 列、引用 → 连接方式
// 用途: 仅用于解析查询路径 (例如 "LinkageGroup.geneticMap.id")
// ==========================================

use thiserror::Error;

/// 路径解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("路径为空")]
    EmptyPath,

    #[error("未知的类: {0}")]
    UnknownClass(String),

    #[error("未知的字段: {class}.{field}")]
    UnknownField { class: String, field: String },

    #[error("路径必须以属性结尾: {0}")]
    NotAnAttribute(String),

    #[error("路径根类不一致: expected={expected}, path={path}")]
    RootMismatch { expected: String, path: String },
}

/// 引用的连接方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    /// 多对一: 外键在当前类的表上
    Reference { fk_column: &'static str },
    /// 一对多: 外键在目标类的表上
    Collection { fk_column: &'static str },
}

/// 引用描述
#[derive(Debug, Clone)]
pub struct ReferenceDescriptor {
    pub name: &'static str,
    pub target_class: &'static str,
    pub kind: ReferenceKind,
}

/// 类描述
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub name: &'static str,
    pub table: &'static str,
    /// (字段名, 列名)，id 字段必须存在
    pub attributes: Vec<(&'static str, &'static str)>,
    pub references: Vec<ReferenceDescriptor>,
}

impl ClassDescriptor {
    pub fn attribute_column(&self, field: &str) -> Option<&'static str> {
        self.attributes
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }

    pub fn reference(&self, field: &str) -> Option<&ReferenceDescriptor> {
        self.references.iter().find(|r| r.name == field)
    }
}

/// 路径中的一次连接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinStep {
    /// 到目前为止的路径前缀 (例如 "GeneticMarker.linkageGroupPositions")，用作连接去重键
    pub prefix: String,
    pub target_table: &'static str,
    pub kind: ReferenceKind,
}

/// 解析后的路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub root_class: &'static str,
    pub root_table: &'static str,
    pub joins: Vec<JoinStep>,
    pub column: &'static str,
}

/// 数据模型
#[derive(Debug, Clone)]
pub struct Model {
    classes: Vec<ClassDescriptor>,
}

impl Model {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    /// 遗传图谱数据模型
    pub fn genetic_map() -> Self {
        Self::new(vec![
            ClassDescriptor {
                name: "GeneticMap",
                table: "genetic_map",
                attributes: vec![("id", "id"), ("identifier", "identifier")],
                references: vec![ReferenceDescriptor {
                    name: "linkageGroups",
                    target_class: "LinkageGroup",
                    kind: ReferenceKind::Collection { fk_column: "genetic_map_id" },
                }],
            },
            ClassDescriptor {
                name: "LinkageGroup",
                table: "linkage_group",
                attributes: vec![
                    ("id", "id"),
                    ("identifier", "identifier"),
                    ("length", "length"),
                    ("number", "number"),
                ],
                references: vec![
                    ReferenceDescriptor {
                        name: "geneticMap",
                        target_class: "GeneticMap",
                        kind: ReferenceKind::Reference { fk_column: "genetic_map_id" },
                    },
                    ReferenceDescriptor {
                        name: "qtls",
                        target_class: "QTL",
                        kind: ReferenceKind::Collection { fk_column: "linkage_group_id" },
                    },
                    ReferenceDescriptor {
                        name: "markerPositions",
                        target_class: "LinkageGroupPosition",
                        kind: ReferenceKind::Collection { fk_column: "linkage_group_id" },
                    },
                ],
            },
            ClassDescriptor {
                name: "GeneticMarker",
                table: "genetic_marker",
                attributes: vec![
                    ("id", "id"),
                    ("primaryIdentifier", "primary_identifier"),
                    ("secondaryIdentifier", "secondary_identifier"),
                ],
                references: vec![ReferenceDescriptor {
                    name: "linkageGroupPositions",
                    target_class: "LinkageGroupPosition",
                    kind: ReferenceKind::Collection { fk_column: "marker_id" },
                }],
            },
            ClassDescriptor {
                name: "LinkageGroupPosition",
                table: "linkage_group_position",
                attributes: vec![("id", "id"), ("position", "position")],
                references: vec![
                    ReferenceDescriptor {
                        name: "linkageGroup",
                        target_class: "LinkageGroup",
                        kind: ReferenceKind::Reference { fk_column: "linkage_group_id" },
                    },
                    ReferenceDescriptor {
                        name: "marker",
                        target_class: "GeneticMarker",
                        kind: ReferenceKind::Reference { fk_column: "marker_id" },
                    },
                ],
            },
            ClassDescriptor {
                name: "QTL",
                table: "qtl",
                attributes: vec![
                    ("id", "id"),
                    ("identifier", "identifier"),
                    ("start", "start"),
                    ("end", "end"),
                ],
                references: vec![ReferenceDescriptor {
                    name: "linkageGroup",
                    target_class: "LinkageGroup",
                    kind: ReferenceKind::Reference { fk_column: "linkage_group_id" },
                }],
            },
        ])
    }

    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// 解析点分路径
    ///
    /// # 示例
    /// ```
    /// use linkage_tracks::query::Model;
    ///
    /// let model = Model::genetic_map();
    /// let resolved = model.resolve("QTL.linkageGroup.id").unwrap();
    /// assert_eq!(resolved.root_table, "qtl");
    /// assert_eq!(resolved.joins.len(), 1);
    /// assert_eq!(resolved.column, "id");
    /// ```
    pub fn resolve(&self, path: &str) -> Result<ResolvedPath, PathError> {
        let mut segments = path.split('.');
        let root_name = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(PathError::EmptyPath)?;
        let root = self
            .class(root_name)
            .ok_or_else(|| PathError::UnknownClass(root_name.to_string()))?;

        let fields: Vec<&str> = segments.collect();
        let (last, intermediate) = fields
            .split_last()
            .ok_or_else(|| PathError::NotAnAttribute(path.to_string()))?;

        let mut current = root;
        let mut prefix = root.name.to_string();
        let mut joins = Vec::with_capacity(intermediate.len());

        for field in intermediate {
            let reference = current.reference(field).ok_or_else(|| PathError::UnknownField {
                class: current.name.to_string(),
                field: field.to_string(),
            })?;
            let target = self
                .class(reference.target_class)
                .ok_or_else(|| PathError::UnknownClass(reference.target_class.to_string()))?;

            prefix.push('.');
            prefix.push_str(field);
            joins.push(JoinStep {
                prefix: prefix.clone(),
                target_table: target.table,
                kind: reference.kind.clone(),
            });
            current = target;
        }

        let column = match current.attribute_column(last) {
            Some(column) => column,
            None if current.reference(last).is_some() => {
                return Err(PathError::NotAnAttribute(path.to_string()))
            }
            None => {
                return Err(PathError::UnknownField {
                    class: current.name.to_string(),
                    field: last.to_string(),
                })
            }
        };

        Ok(ResolvedPath {
            root_class: root.name,
            root_table: root.table,
            joins,
            column,
        })
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::genetic_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_attribute() {
        let model = Model::genetic_map();
        let resolved = model.resolve("LinkageGroup.number").unwrap();
        assert_eq!(resolved.root_class, "LinkageGroup");
        assert_eq!(resolved.root_table, "linkage_group");
        assert!(resolved.joins.is_empty());
        assert_eq!(resolved.column, "number");
    }

    #[test]
    fn test_resolve_collection_then_reference() {
        let model = Model::genetic_map();
        let resolved = model
            .resolve("GeneticMarker.linkageGroupPositions.linkageGroup.id")
            .unwrap();

        assert_eq!(resolved.joins.len(), 2);
        assert_eq!(resolved.joins[0].prefix, "GeneticMarker.linkageGroupPositions");
        assert_eq!(
            resolved.joins[0].kind,
            ReferenceKind::Collection { fk_column: "marker_id" }
        );
        assert_eq!(resolved.joins[1].prefix, "GeneticMarker.linkageGroupPositions.linkageGroup");
        assert_eq!(resolved.joins[1].target_table, "linkage_group");
        assert_eq!(resolved.column, "id");
    }

    #[test]
    fn test_resolve_errors() {
        let model = Model::genetic_map();

        assert_eq!(model.resolve(""), Err(PathError::EmptyPath));
        assert_eq!(
            model.resolve("Gene.id"),
            Err(PathError::UnknownClass("Gene".to_string()))
        );
        assert_eq!(
            model.resolve("QTL.linkageGroup.colour"),
            Err(PathError::UnknownField {
                class: "LinkageGroup".to_string(),
                field: "colour".to_string()
            })
        );
        assert_eq!(
            model.resolve("QTL.linkageGroup"),
            Err(PathError::NotAnAttribute("QTL.linkageGroup".to_string()))
        );
        assert_eq!(
            model.resolve("QTL"),
            Err(PathError::NotAnAttribute("QTL".to_string()))
        );
    }
}
