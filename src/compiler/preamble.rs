/// 生成文件的固定前导：四个输出结构体的声明
/// 字段及可选性与 `RecordEncoder` 的输出一一对应
pub const PREAMBLE: &str = r#"#![allow(dead_code)]

#[derive(Debug)]
pub struct Element {
    pub regex: &'static str,
    pub name: &'static str,
    pub version: Option<&'static str>,
    pub category: Option<&'static str>,
    pub url: Option<&'static str>,
    pub producer: Option<Producer>,
}

#[derive(Debug)]
pub struct Producer {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct Brand {
    pub regex: &'static str,
    pub device: Option<&'static str>,
    pub model: Option<&'static str>,
    pub models: Option<&'static [Model]>,
}

#[derive(Debug)]
pub struct Model {
    pub regex: &'static str,
    pub model: &'static str,
}

"#;
