// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::domain::models::DomainSummary;

/// 汇总文件名的保留前缀，内容文件名永远不会以它开头
pub const SUMMARY_MARKER: char = '!';

/// 内容文件扩展名
pub const CONTENT_EXTENSION: &str = ".txt";

/// 汇总错误类型
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("domain directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("'{0}' is not a domain directory name")]
    InvalidDomain(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// 域名对应的汇总文件名，例如 `!example.com_summarize.txt`
pub fn summary_file_name(domain: &str) -> String {
    format!("{}{}_summarize{}", SUMMARY_MARKER, domain, CONTENT_EXTENSION)
}

/// 判断文件名是否属于应被汇总的内容文件
pub fn is_content_file(filename: &str) -> bool {
    filename.ends_with(CONTENT_EXTENSION) && !filename.starts_with(SUMMARY_MARKER)
}

/// 按文件顺序拼出汇总文本
pub fn render_summary<'a, I>(domain: &str, blocks: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut body = format!("Content summaries for {} are provided below:\n\n", domain);
    for (filename, content) in blocks {
        body.push_str(filename);
        body.push_str(" content is:\n<content>");
        body.push_str(content);
        body.push_str("</content>\n\n");
    }
    body
}

/// 域名汇总器
///
/// 每次调用都会完整重建汇总文件，不做合并或增量更新。
#[derive(Debug, Clone, Copy, Default)]
pub struct Summarizer;

impl Summarizer {
    /// 重建单个域名目录的汇总文件
    ///
    /// # 参数
    ///
    /// * `domain_dir` - 域名目录
    /// * `domain` - 域名，用于汇总文件名和标题行
    ///
    /// # 返回值
    ///
    /// * `Ok(DomainSummary)` - 已写入的汇总
    /// * `Err(SummaryError)` - 目录不存在或读写失败
    pub async fn summarize(
        &self,
        domain_dir: &Path,
        domain: &str,
    ) -> Result<DomainSummary, SummaryError> {
        if !fs::try_exists(domain_dir)
            .await
            .map_err(|e| SummaryError::io(domain_dir, e))?
        {
            return Err(SummaryError::MissingDirectory(domain_dir.to_path_buf()));
        }

        let files = list_content_files(domain_dir).await?;

        let mut contents = Vec::with_capacity(files.len());
        for filename in &files {
            let path = domain_dir.join(filename);
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| SummaryError::io(&path, e))?;
            contents.push(content);
        }

        let body = render_summary(
            domain,
            files
                .iter()
                .map(String::as_str)
                .zip(contents.iter().map(String::as_str)),
        );

        let path = domain_dir.join(summary_file_name(domain));
        fs::write(&path, body.as_bytes())
            .await
            .map_err(|e| SummaryError::io(&path, e))?;

        debug!(domain, path = %path.display(), blocks = files.len(), "Summary written");

        Ok(DomainSummary {
            domain: domain.to_string(),
            files,
            body,
            path,
        })
    }

    /// 重建根目录下所有域名目录的汇总
    ///
    /// 单个域名失败不会影响其余域名，结果按域名排序返回。
    pub async fn summarize_all(
        &self,
        base_path: &Path,
    ) -> Result<Vec<(String, Result<DomainSummary, SummaryError>)>, SummaryError> {
        let mut domains = Vec::new();
        let mut entries = fs::read_dir(base_path)
            .await
            .map_err(|e| SummaryError::io(base_path, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SummaryError::io(base_path, e))?
        {
            let is_dir = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            match entry.file_name().into_string() {
                Ok(name) if is_dir => domains.push(name),
                Ok(_) => {}
                Err(name) => warn!("Skipping non UTF-8 directory {:?}", name),
            }
        }
        domains.sort();

        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            let result = self.summarize(&base_path.join(&domain), &domain).await;
            match &result {
                Ok(summary) => info!(
                    domain = %domain,
                    blocks = summary.block_count(),
                    "Domain summary regenerated"
                ),
                Err(e) => warn!(domain = %domain, error = %e, "Domain summary failed"),
            }
            results.push((domain, result));
        }

        Ok(results)
    }
}

/// 列出目录中的内容文件，按文件名排序
async fn list_content_files(dir: &Path) -> Result<Vec<String>, SummaryError> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| SummaryError::io(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SummaryError::io(dir, e))?
    {
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            if is_content_file(&name) {
                files.push(name);
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "summarizer_test.rs"]
mod tests;
