//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，字段顺序即生成表中的字段顺序

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// 规则元素（来自列表结构的YAML文件，如 bots.yml / oss.yml）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleElement {
    #[serde(deserialize_with = "scalar::required")]
    pub regex: String,
    #[serde(deserialize_with = "scalar::required")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub url: Option<String>,
    #[serde(default)]
    pub producer: Option<Producer>,
}

/// 规则元素的生产者信息，出现时两个字段均必填
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Producer {
    #[serde(deserialize_with = "scalar::required")]
    pub name: String,
    #[serde(deserialize_with = "scalar::required")]
    pub url: String,
}

/// 品牌记录（来自映射结构的YAML文件，如 mobiles.yml，键为品牌名）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandRecord {
    #[serde(deserialize_with = "scalar::required")]
    pub regex: String,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub device: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub model: Option<String>,
    #[serde(default)]
    pub models: Option<Vec<Model>>,
}

impl BrandRecord {
    /// 仅含正则的记录，用于片段列表中的每一项
    pub fn fragment(regex: String) -> Self {
        Self {
            regex,
            device: None,
            model: None,
            models: None,
        }
    }
}

/// 品牌下的机型子记录
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
    #[serde(deserialize_with = "scalar::required")]
    pub regex: String,
    #[serde(deserialize_with = "scalar::required")]
    pub model: String,
}

/// YAML标量到字符串的转换
/// 上游文件中部分版本号/型号被YAML解析为数字或布尔值，按其文本形式保留
pub(crate) mod scalar {
    use super::*;
    use serde::de::Error;

    /// 标量文本；序列、映射、带标签值不是合法标量
    pub fn text(value: &Value) -> Result<String, &'static str> {
        match value {
            Value::String(s) => Ok(s.clone()),
            // 整数的文本无歧义；小数（如 1.10）解析后已丢失原文，必须在源文件中加引号
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            Value::Number(_) => Err("non-integer number"),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Err("null"),
            Value::Sequence(_) => Err("sequence"),
            Value::Mapping(_) => Err("mapping"),
            Value::Tagged(_) => Err("tagged value"),
        }
    }

    pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        text(&value).map_err(|kind| D::Error::custom(format!("expected a scalar, found {}", kind)))
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => text(&value)
                .map(Some)
                .map_err(|kind| D::Error::custom(format!("expected a scalar, found {}", kind))),
        }
    }
}
