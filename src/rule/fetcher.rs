//! 规则文件缓存拉取器
//! 只在本地缓存缺失时拉取；上游按固定提交寻址，内容不可变，因此不做过期校验
//!
//! 已知限制：存在性检查与写入之间没有加锁，同一路径被多个进程同时拉取时结果不确定。
//! 单次运行内各路径互不相同，顺序执行即可。

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use super::source::{HttpSource, RemoteRuleSource};
use crate::error::{CodegenError, CodegenResult};

/// 单个文件的缓存结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 本地已存在，未发起请求
    Cached,
    /// 新拉取并写入缓存
    Downloaded,
}

/// 一次缓存填充的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub cached: usize,
    pub downloaded: usize,
}

/// 规则拉取器
pub struct RuleFetcher<S> {
    source: S,
    cache_dir: PathBuf,
}

impl<S: HttpSource> RuleFetcher<S> {
    pub fn new(source: S, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            cache_dir: cache_dir.into(),
        }
    }

    /// 确保相对路径已缓存，幂等
    pub async fn ensure_cached(&self, relative_path: &str, url: &Url) -> CodegenResult<FetchOutcome> {
        let target = self.cache_dir.join(relative_path);

        let exists = tokio::fs::try_exists(&target)
            .await
            .map_err(|e| CodegenError::file(&target, e))?;
        if exists {
            debug!("{} already cached, skip", relative_path);
            return Ok(FetchOutcome::Cached);
        }

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CodegenError::file(parent, e))?;
        }

        debug!("fetching {} from {}", relative_path, url);
        let body = self.source.fetch_text(url).await?;

        // 先写临时文件再重命名，中断的下载不会被当成已缓存
        let partial = partial_path(&target);
        tokio::fs::write(&partial, body.as_bytes())
            .await
            .map_err(|e| CodegenError::file(&partial, e))?;
        tokio::fs::rename(&partial, &target)
            .await
            .map_err(|e| CodegenError::file(&target, e))?;

        info!("cached {} ({} bytes)", relative_path, body.len());
        Ok(FetchOutcome::Downloaded)
    }

    /// 按顺序填充全部规则源，任一失败即中止
    pub async fn fetch_all(&self, sources: &[RemoteRuleSource]) -> CodegenResult<FetchSummary> {
        let mut summary = FetchSummary::default();

        for source in sources {
            match self.ensure_cached(&source.relative_path, &source.raw_url).await? {
                FetchOutcome::Cached => summary.cached += 1,
                FetchOutcome::Downloaded => summary.downloaded += 1,
            }
        }

        info!(
            "cache ready under {}: {} downloaded, {} already cached",
            self.cache_dir.display(),
            summary.downloaded,
            summary.cached
        );
        Ok(summary)
    }
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    target.with_file_name(name)
}
