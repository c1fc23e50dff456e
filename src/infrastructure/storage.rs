// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::config::settings::NamingStrategy;
use crate::domain::models::ContentRecord;
use crate::domain::services::summarizer::{is_content_file, CONTENT_EXTENSION, SUMMARY_MARKER};
use crate::domain::services::title_extractor::{extract_title, UNKNOWN_TITLE};
use crate::utils::url_utils::{domain_of, is_safe_dir_name};

const MAX_TITLE_LEN: usize = 100;
/// 序号前缀的最大位数，更长的数字前缀是时间戳
const MAX_SEQUENCE_DIGITS: usize = 9;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[/\\:*?"<>|\x00-\x1f\x7f]+"#).expect("Failed to compile unsafe chars regex")
});
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// URL 无法解析出可用的域名
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 把标题整理成可以安全放进文件名的形式
///
/// 转写为 ASCII，替换路径分隔符与保留字符，去掉开头的汇总标记，
/// 长度截断到 100 个字符，整理后为空时使用 [`UNKNOWN_TITLE`]。
pub fn sanitize_title(title: &str) -> String {
    let ascii = deunicode::deunicode(title);
    let collapsed = WHITESPACE_RUNS.replace_all(&ascii, " ");
    let replaced = UNSAFE_CHARS.replace_all(&collapsed, "_");

    let mut cleaned: &str = replaced
        .trim_start_matches(|c: char| c == SUMMARY_MARKER || c == '.' || c.is_whitespace())
        .trim_end();
    if let Some((cut, _)) = cleaned.char_indices().nth(MAX_TITLE_LEN) {
        cleaned = cleaned[..cut].trim_end();
    }
    let cleaned = cleaned.trim_end_matches('.');

    if cleaned.is_empty() {
        UNKNOWN_TITLE.to_string()
    } else {
        cleaned.to_string()
    }
}

/// 按域名组织的本地内容存储
///
/// 独占 `base_path` 下的目录树：每个域名一个目录，每份内容一个文件。
/// 同时记录本次运行中写入过内容的域名，保证每个域名只汇总一次。
#[derive(Debug)]
pub struct DomainStore {
    base_path: PathBuf,
    naming: NamingStrategy,
    /// 本次运行已准备好的域名目录及其当前最大序号
    cursors: HashMap<String, u64>,
    touched: BTreeSet<String>,
}

impl DomainStore {
    pub fn new(base_path: impl Into<PathBuf>, naming: NamingStrategy) -> Self {
        Self {
            base_path: base_path.into(),
            naming,
            cursors: HashMap::new(),
            touched: BTreeSet::new(),
        }
    }

    /// 域名对应的目录
    pub fn domain_dir(&self, domain: &str) -> PathBuf {
        self.base_path.join(domain)
    }

    /// 从URL推导域名
    ///
    /// 结果直接用作目录名，因此额外拒绝 `.`、`..` 以及带路径分隔符的主机名。
    pub fn domain_for_url(url: &str) -> Result<String, StoreError> {
        let domain = domain_of(url).map_err(|e| StoreError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !is_safe_dir_name(&domain) {
            return Err(StoreError::InvalidUrl(format!(
                "{}: unusable host '{}'",
                url, domain
            )));
        }
        Ok(domain)
    }

    /// 本次运行中至少写入过一份内容的域名（有序、去重）
    pub fn touched_domains(&self) -> impl Iterator<Item = &str> {
        self.touched.iter().map(String::as_str)
    }

    /// 将一份内容写入域名目录
    ///
    /// # 参数
    ///
    /// * `domain` - 由 [`DomainStore::domain_for_url`] 得到的域名
    /// * `content` - 抓取到的文本
    ///
    /// # 返回值
    ///
    /// * `Ok(ContentRecord)` - 新写入的文件
    /// * `Err(StoreError)` - 目录创建或文件写入失败，域名不会被记为已写入
    pub async fn persist(
        &mut self,
        domain: &str,
        content: &str,
    ) -> Result<ContentRecord, StoreError> {
        let dir = self.domain_dir(domain);
        self.prepare_domain(domain, &dir).await?;

        let title = sanitize_title(&extract_title(content));
        let (filename, path, mut file) = self.create_unique_file(domain, &dir, &title).await?;

        let written = async {
            file.write_all(content.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = written {
            // don't leave a truncated record behind for the summarizer
            let _ = fs::remove_file(&path).await;
            return Err(e.into());
        }

        self.touched.insert(domain.to_string());
        debug!(domain, path = %path.display(), bytes = content.len(), "Content persisted");

        Ok(ContentRecord {
            domain: domain.to_string(),
            filename,
            path,
            bytes: content.len(),
        })
    }

    /// 本次运行第一次写入某域名时创建目录并读取已有的最大序号
    async fn prepare_domain(&mut self, domain: &str, dir: &Path) -> Result<(), StoreError> {
        if self.cursors.contains_key(domain) {
            return Ok(());
        }

        let existed = fs::try_exists(dir).await?;
        // idempotent, but still errors when the path exists as a regular file
        fs::create_dir_all(dir).await?;
        if !existed {
            info!("Created directory `{}` for domain {}.", dir.display(), domain);
        }

        let cursor = match self.naming {
            NamingStrategy::Sequence => highest_sequence(dir).await?,
            NamingStrategy::Timestamp => 0,
        };
        self.cursors.insert(domain.to_string(), cursor);
        Ok(())
    }

    async fn create_unique_file(
        &mut self,
        domain: &str,
        dir: &Path,
        title: &str,
    ) -> Result<(String, PathBuf, fs::File), StoreError> {
        let timestamp = Utc::now().timestamp();
        let mut attempt: u64 = 0;

        loop {
            let filename = match self.naming {
                NamingStrategy::Sequence => {
                    let cursor = self.cursors.entry(domain.to_string()).or_insert(0);
                    *cursor += 1;
                    format!("{:04}_{}{}", cursor, title, CONTENT_EXTENSION)
                }
                NamingStrategy::Timestamp if attempt == 0 => {
                    format!("{}_{}{}", timestamp, title, CONTENT_EXTENSION)
                }
                NamingStrategy::Timestamp => {
                    format!("{}_{}-{}{}", timestamp, title, attempt, CONTENT_EXTENSION)
                }
            };
            attempt += 1;

            let path = dir.join(&filename);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => return Ok((filename, path, file)),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// 目录中已有内容文件的最大序号
async fn highest_sequence(dir: &Path) -> Result<u64, StoreError> {
    let mut highest = 0;
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_content_file(&name) {
            continue;
        }
        if let Some(index) = sequence_index(&name) {
            highest = highest.max(index);
        }
    }
    Ok(highest)
}

/// 文件名中的序号前缀；时间戳命名的文件不计入
fn sequence_index(filename: &str) -> Option<u64> {
    let (prefix, _) = filename.split_once('_')?;
    if prefix.is_empty()
        || prefix.len() > MAX_SEQUENCE_DIGITS
        || !prefix.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    prefix.parse().ok()
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
