//! 远程规则源定义与HTTP传输

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::GlobalConfig;
use crate::error::{CodegenError, CodegenResult};

/// 单个远程规则源：缓存相对路径 + 固定版本的原始URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRuleSource {
    pub relative_path: String,
    pub raw_url: Url,
}

/// 规则文件的HTTP来源
#[async_trait]
pub trait HttpSource: Send + Sync {
    /// GET 指定URL并返回完整响应体文本，非2xx状态视为失败
    async fn fetch_text(&self, url: &Url) -> CodegenResult<String>;
}

/// 基于 reqwest 的默认HTTP来源
#[derive(Debug, Clone)]
pub struct ReqwestSource {
    client: Client,
}

impl ReqwestSource {
    pub fn new(config: &GlobalConfig) -> CodegenResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSource for ReqwestSource {
    async fn fetch_text(&self, url: &Url) -> CodegenResult<String> {
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(CodegenError::HttpStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
