//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::CodegenResult;
use crate::rule::source::RemoteRuleSource;

/// 上游仓库固定的数据文件（相对路径，顺序即生成顺序）
pub const DATA_FILES: &[&str] = &[
    "regexes/bots.yml",
    "regexes/oss.yml",
    "regexes/vendorfragments.yml",
    "regexes/client/browser_engine.yml",
    "regexes/client/browsers.yml",
    "regexes/client/feed_readers.yml",
    "regexes/client/libraries.yml",
    "regexes/client/mediaplayers.yml",
    "regexes/client/mobile_apps.yml",
    "regexes/client/pim.yml",
    "regexes/device/cameras.yml",
    "regexes/device/car_browsers.yml",
    "regexes/device/consoles.yml",
    "regexes/device/mobiles.yml",
    "regexes/device/notebooks.yml",
    "regexes/device/portable_media_player.yml",
    "regexes/device/televisions.yml",
];

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 本地缓存根目录
    pub cache_dir: PathBuf,
    // 生成的Rust源文件路径
    pub output_path: PathBuf,
    // 上游内容主机
    pub upstream_host: String,
    // 上游仓库（owner/name）
    pub repo: String,
    // 固定的上游提交
    pub revision: String,
    // 需要拉取/生成的数据文件
    pub data_files: Vec<String>,
    // 超时配置
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(".cache"),
            output_path: PathBuf::from("src/data.rs"),
            upstream_host: "raw.githubusercontent.com".to_string(),
            repo: "matomo-org/device-detector".to_string(),
            revision: "d879f07496d6e6ee89cef5bcd925383d9b0c2cc0".to_string(),
            data_files: DATA_FILES.iter().map(|f| f.to_string()).collect(),
            http_timeout: Duration::from_secs(30),
            user_agent: concat!("rsdevicedetector-codegen/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GlobalConfig {
    /// 数据文件在上游固定版本下的原始URL
    /// 格式：https://<host>/<repo>/<revision>/<path>
    pub fn source_url(&self, relative_path: &str) -> CodegenResult<Url> {
        let raw = format!(
            "https://{}/{}/{}/{}",
            self.upstream_host.trim_matches('/'),
            self.repo.trim_matches('/'),
            self.revision,
            relative_path.trim_start_matches('/'),
        );
        Ok(Url::parse(&raw)?)
    }

    /// 数据文件在本地缓存中的路径（镜像相对路径结构）
    pub fn cache_path(&self, relative_path: &str) -> PathBuf {
        self.cache_dir.join(relative_path)
    }

    /// 按配置顺序展开全部远程规则源
    pub fn remote_sources(&self) -> CodegenResult<Vec<RemoteRuleSource>> {
        self.data_files
            .iter()
            .map(|file| {
                Ok(RemoteRuleSource {
                    relative_path: file.clone(),
                    raw_url: self.source_url(file)?,
                })
            })
            .collect()
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.cache_dir = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn upstream_host(mut self, host: impl Into<String>) -> Self {
        self.config.upstream_host = host.into();
        self
    }

    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.config.repo = repo.into();
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.config.revision = revision.into();
        self
    }

    pub fn data_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.data_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
