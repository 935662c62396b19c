//! 记录编码器
//! 把单条规则元素 / 品牌记录写成静态表中的一项，字段顺序固定为输出结构体的声明顺序

use super::escape::{EscapeMode, escape};
use crate::rule::{BrandRecord, Model, Producer, RuleDocument, RuleElement};

const INDENT: &str = "    ";

/// 记录编码器
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordEncoder;

impl RecordEncoder {
    pub fn new() -> Self {
        Self
    }

    /// 写出一整张静态表，返回写入的记录数；空文档不输出
    pub fn encode_table(&self, out: &mut String, ident: &str, doc: &RuleDocument) -> usize {
        match doc {
            RuleDocument::Elements(elements) => {
                out.push_str(&format!(
                    "pub static {}: [Element; {}] = [\n",
                    ident,
                    elements.len()
                ));
                for element in elements {
                    self.encode_element(out, element);
                }
                out.push_str("];\n");
                elements.len()
            }
            RuleDocument::Brands(brands) => {
                out.push_str(&format!(
                    "pub static {}: [(&str, Brand); {}] = [\n",
                    ident,
                    brands.len()
                ));
                for (name, brand) in brands {
                    self.encode_brand(out, name, brand);
                }
                out.push_str("];\n\n");
                brands.len()
            }
            RuleDocument::Empty => 0,
        }
    }

    pub fn encode_element(&self, out: &mut String, element: &RuleElement) {
        line(out, 1, "Element {");
        field(out, 2, "regex", &required(&element.regex));
        field(out, 2, "name", &required(&element.name));
        field(out, 2, "version", &optional(element.version.as_deref()));
        field(out, 2, "category", &optional(element.category.as_deref()));
        field(out, 2, "url", &optional(element.url.as_deref()));
        match &element.producer {
            None => field(out, 2, "producer", "None"),
            Some(producer) => self.encode_producer(out, producer),
        }
        line(out, 1, "},");
    }

    fn encode_producer(&self, out: &mut String, producer: &Producer) {
        line(out, 2, "producer: Some(Producer {");
        field(out, 3, "name", &required(&producer.name));
        field(out, 3, "url", &required(&producer.url));
        line(out, 2, "}),");
    }

    pub fn encode_brand(&self, out: &mut String, name: &str, brand: &BrandRecord) {
        line(out, 1, &format!("({}, Brand {{", required(name)));
        field(out, 2, "regex", &required(&brand.regex));
        field(out, 2, "device", &optional(brand.device.as_deref()));
        field(out, 2, "model", &optional(brand.model.as_deref()));
        match &brand.models {
            None => field(out, 2, "models", "None"),
            Some(models) => {
                line(out, 2, "models: Some(&[");
                for model in models {
                    self.encode_model(out, model);
                }
                line(out, 2, "]),");
            }
        }
        line(out, 1, "}),");
    }

    fn encode_model(&self, out: &mut String, model: &Model) {
        line(out, 3, "Model {");
        field(out, 4, "regex", &required(&model.regex));
        field(out, 4, "model", &required(&model.model));
        line(out, 3, "},");
    }
}

/// 必填字段：裸字符串字面量，空串合法
fn required(value: &str) -> String {
    format!("\"{}\"", escape(value, EscapeMode::Full))
}

/// 可选字段：存在（含空串）为 Some("...")，缺失或null为 None
fn optional(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", required(value)),
        None => "None".to_string(),
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn field(out: &mut String, depth: usize, name: &str, value: &str) {
    line(out, depth, &format!("{}: {},", name, value));
}
