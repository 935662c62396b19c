//! 规则模块：负责规则文件的拉取、缓存、结构识别与数据模型定义
pub mod classifier;
pub mod fetcher;
pub mod model;
pub mod source;

// 导出核心接口
pub use self::classifier::{DocumentShape, RuleDocument, SchemaClassifier};
pub use self::fetcher::{FetchOutcome, FetchSummary, RuleFetcher};
pub use self::model::{BrandRecord, Model, Producer, RuleElement};
pub use self::source::{HttpSource, RemoteRuleSource, ReqwestSource};
