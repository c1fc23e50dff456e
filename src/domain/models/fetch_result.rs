// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use super::url_entry::UrlEntry;

/// 单个URL的抓取结果
///
/// 是否成功完全由 `content` 是否存在决定，两者不会出现不一致。
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// 来源条目
    pub entry: UrlEntry,
    /// 域名；URL 无法解析出主机时为 `None`
    pub domain: Option<String>,
    /// 抓取到的文本
    pub content: Option<String>,
    /// 失败原因
    pub error: Option<String>,
    /// 请求耗时
    pub elapsed: Duration,
}

impl FetchResult {
    pub fn succeeded(entry: UrlEntry, domain: String, content: String, elapsed: Duration) -> Self {
        Self {
            entry,
            domain: Some(domain),
            content: Some(content),
            error: None,
            elapsed,
        }
    }

    pub fn failed(
        entry: UrlEntry,
        domain: Option<String>,
        error: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            entry,
            domain,
            content: None,
            error: Some(error.into()),
            elapsed,
        }
    }

    pub fn url(&self) -> &str {
        &self.entry.url
    }

    pub fn success(&self) -> bool {
        self.content.is_some()
    }
}
