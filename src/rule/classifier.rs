//! YAML文档结构识别
//! 上游文件只有两种结构：规则元素列表 / 品牌名到品牌记录的映射，空文件解析为null

use serde_yaml::Value;
use tracing::debug;

use super::model::{BrandRecord, RuleElement, scalar};
use crate::error::{CodegenError, CodegenResult};

/// 文档结构分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    List,
    Mapping,
    Empty,
}

/// 已分类并解码的规则文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDocument {
    /// 列表结构：按源顺序的规则元素
    Elements(Vec<RuleElement>),
    /// 映射结构：按声明顺序的 (品牌名, 品牌记录)
    Brands(Vec<(String, BrandRecord)>),
    /// null 文档，不产生任何输出表
    Empty,
}

impl RuleDocument {
    /// 表中的记录数
    pub fn len(&self) -> usize {
        match self {
            RuleDocument::Elements(elements) => elements.len(),
            RuleDocument::Brands(brands) => brands.len(),
            RuleDocument::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 文档结构分类器
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaClassifier;

impl SchemaClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 判定文档结构；标量和带标签值不受支持
    pub fn classify(&self, file: &str, doc: &Value) -> CodegenResult<DocumentShape> {
        match doc {
            Value::Sequence(_) => Ok(DocumentShape::List),
            Value::Null => Ok(DocumentShape::Empty),
            Value::Mapping(_) => Ok(DocumentShape::Mapping),
            other => Err(CodegenError::UnsupportedShape {
                file: file.to_string(),
                kind: value_kind(other),
            }),
        }
    }

    /// 解析YAML文本并解码为对应结构的记录
    pub fn parse(&self, file: &str, content: &str) -> CodegenResult<RuleDocument> {
        let doc: Value = serde_yaml::from_str(content).map_err(|source| CodegenError::YamlError {
            file: file.to_string(),
            source,
        })?;
        self.decode(file, doc)
    }

    /// 按分类结果把文档解码为强类型记录
    pub fn decode(&self, file: &str, doc: Value) -> CodegenResult<RuleDocument> {
        let shape = self.classify(file, &doc)?;

        let decoded = match (shape, doc) {
            (DocumentShape::List, Value::Sequence(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_yaml::from_value::<RuleElement>(item)
                        .map_err(|e| malformed(file, format!("#{}", index), e.to_string()))
                })
                .collect::<CodegenResult<Vec<_>>>()
                .map(RuleDocument::Elements),

            (DocumentShape::Mapping, Value::Mapping(entries)) => {
                let mut brands = Vec::with_capacity(entries.len());
                for (index, (key, value)) in entries.into_iter().enumerate() {
                    let name = scalar::text(&key).map_err(|kind| {
                        malformed(file, format!("#{}", index), format!("brand key is a {}", kind))
                    })?;
                    match value {
                        // 片段列表（如 vendorfragments.yml）：每个片段展开为一条仅含正则的记录
                        Value::Sequence(fragments) => {
                            for (position, fragment) in fragments.iter().enumerate() {
                                let regex = scalar::text(fragment).map_err(|kind| {
                                    malformed(
                                        file,
                                        format!("`{}` #{}", name, position),
                                        format!("expected a scalar fragment, found {}", kind),
                                    )
                                })?;
                                brands.push((name.clone(), BrandRecord::fragment(regex)));
                            }
                        }
                        value => {
                            let brand = serde_yaml::from_value::<BrandRecord>(value)
                                .map_err(|e| malformed(file, format!("`{}`", name), e.to_string()))?;
                            brands.push((name, brand));
                        }
                    }
                }
                Ok(RuleDocument::Brands(brands))
            }

            (DocumentShape::Empty, _) => Ok(RuleDocument::Empty),

            // classify 与值的变体一一对应
            (_, other) => Err(CodegenError::UnsupportedShape {
                file: file.to_string(),
                kind: value_kind(&other),
            }),
        }?;

        debug!("{} classified as {:?} ({} records)", file, shape, decoded.len());
        Ok(decoded)
    }
}

fn malformed(file: &str, record: String, reason: String) -> CodegenError {
    CodegenError::MalformedRecord {
        file: file.to_string(),
        record,
        reason,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
