//! rsdevicedetector-codegen - device-detector YAML规则到Rust静态表的构建期编译器

// 导出全局错误类型
pub use self::error::{CodegenError, CodegenResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, DATA_FILES, GlobalConfig};

// 导出规则模块核心接口
pub use self::rule::{
    BrandRecord, DocumentShape, FetchOutcome, FetchSummary, HttpSource, Model, Producer,
    RemoteRuleSource, ReqwestSource, RuleDocument, RuleElement, RuleFetcher, SchemaClassifier,
};

// 导出编译模块核心接口
pub use self::compiler::{
    AssembledOutput, DocumentAssembler, EscapeMode, PREAMBLE, RecordEncoder, TableSummary, escape,
};

// 声明所有子模块
pub mod compiler;
pub mod config;
pub mod error;
pub mod rule;
