//! 文档汇编器
//! 按配置顺序遍历已缓存的规则文件，每个非空文件输出一张静态表，
//! 全部成功后一次性写入输出文件；任何失败都不会改动已有输出

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::encoder::RecordEncoder;
use super::preamble::PREAMBLE;
use crate::config::GlobalConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::rule::{RuleDocument, SchemaClassifier};

static TABLE_IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z_][A-Z0-9_]*$").expect("table identifier pattern is valid")
});

/// 单张静态表的统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub file: String,
    pub ident: String,
    pub records: usize,
}

/// 汇编结果
#[derive(Debug, Clone, Default)]
pub struct AssembledOutput {
    pub buffer: String,
    pub tables: Vec<TableSummary>,
    /// 内容为null、未产生表的文件
    pub skipped: Vec<String>,
}

/// 文档汇编器
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentAssembler {
    classifier: SchemaClassifier,
    encoder: RecordEncoder,
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 (相对路径, YAML文本) 序列构建完整输出，纯函数
    pub fn assemble<'a, I>(&self, documents: I) -> CodegenResult<AssembledOutput>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut output = AssembledOutput {
            buffer: PREAMBLE.to_string(),
            ..Default::default()
        };
        let mut declared = HashSet::new();

        for (file, content) in documents {
            let doc = self.classifier.parse(file, content)?;

            if let RuleDocument::Empty = doc {
                debug!("{} is empty, no table emitted", file);
                output.skipped.push(file.to_string());
                continue;
            }

            // 只有真正输出的表才需要合法的表名
            let ident = table_ident(file)?;
            if doc.is_empty() {
                debug!("{} declares an empty table {}", file, ident);
            }

            if !declared.insert(ident.clone()) {
                return Err(CodegenError::DuplicateTable {
                    file: file.to_string(),
                    ident,
                });
            }

            let records = self.encoder.encode_table(&mut output.buffer, &ident, &doc);
            debug!("{} -> {} ({} records)", file, ident, records);
            output.tables.push(TableSummary {
                file: file.to_string(),
                ident,
                records,
            });
        }

        Ok(output)
    }

    /// 读取全部已缓存文件，缺失任一文件即失败
    pub fn load_cached(&self, config: &GlobalConfig) -> CodegenResult<Vec<(String, String)>> {
        config
            .data_files
            .iter()
            .map(|file| {
                let path = config.cache_path(file);
                let content =
                    fs::read_to_string(&path).map_err(|e| CodegenError::file(&path, e))?;
                Ok((file.clone(), content))
            })
            .collect()
    }

    /// 从缓存生成输出文件
    pub fn generate(&self, config: &GlobalConfig) -> CodegenResult<AssembledOutput> {
        let sources = self.load_cached(config)?;
        let output = self.assemble(sources.iter().map(|(f, c)| (f.as_str(), c.as_str())))?;

        write_output(&config.output_path, &output.buffer)?;

        let records: usize = output.tables.iter().map(|t| t.records).sum();
        info!(
            "wrote {} tables ({} records, {} empty files) to {}",
            output.tables.len(),
            records,
            output.skipped.len(),
            config.output_path.display()
        );
        Ok(output)
    }
}

/// 静态表名：文件名去扩展名后转大写
pub fn table_ident(file: &str) -> CodegenResult<String> {
    let stem = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ident = stem.to_ascii_uppercase();

    if !TABLE_IDENT.is_match(&ident) {
        return Err(CodegenError::InvalidTableIdent {
            file: file.to_string(),
            ident,
        });
    }
    Ok(ident)
}

/// 整体覆盖写入：先写同目录临时文件，再重命名到目标路径
pub fn write_output(path: &Path, buffer: &str) -> CodegenResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CodegenError::file(parent, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, buffer).map_err(|e| CodegenError::file(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| CodegenError::file(path, e))?;
    Ok(())
}
