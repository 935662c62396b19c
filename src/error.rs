//! 全局错误类型定义

use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum CodegenError {
    // 拉取相关错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("URL {url} returned status code {status}")]
    HttpStatusError { url: String, status: u16 },
    #[error("URL parse failed: {0}")]
    UrlError(#[from] UrlParseError),

    // 解析相关错误
    #[error("{file}: YAML parse failed: {source}")]
    YamlError {
        file: String,
        source: serde_yaml::Error,
    },
    #[error("{file}: unsupported document shape `{kind}`, expected a sequence, a mapping or null")]
    UnsupportedShape { file: String, kind: &'static str },
    #[error("{file}: malformed record {record}: {reason}")]
    MalformedRecord {
        file: String,
        record: String,
        reason: String,
    },

    // 生成相关错误
    #[error("{file}: `{ident}` is not a valid static table identifier")]
    InvalidTableIdent { file: String, ident: String },
    #[error("{file}: table `{ident}` is already declared by an earlier file")]
    DuplicateTable { file: String, ident: String },

    // 基础错误
    #[error("IO operation failed on {}: {source}", path.display())]
    FileError { path: PathBuf, source: IoError },
}

impl CodegenError {
    /// 为IO错误附加出错的文件路径
    pub fn file(path: impl Into<PathBuf>, source: IoError) -> Self {
        Self::FileError {
            path: path.into(),
            source,
        }
    }
}

// 全局Result类型
pub type CodegenResult<T> = Result<T, CodegenError>;
