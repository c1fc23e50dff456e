// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
///
/// 区分状态码与传输层错误只是为了日志，下游一律按“无内容”处理。
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败（连接、TLS、读取响应体等）
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),
    /// 非200状态码
    #[error("Unexpected status: HTTP {0}")]
    Status(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::RequestFailed(e)
        }
    }
}

impl FetchError {
    /// 日志中使用的失败类别
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::RequestFailed(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Timeout => "timeout",
        }
    }
}

/// 内容抓取特质
///
/// 实现必须可以被多个任务并发调用，除连接池外不持有可变共享状态。
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// 抓取单个URL的文本内容，不做重试
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
