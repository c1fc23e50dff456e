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

use crate::config::settings::ReaderSettings;
use crate::engines::traits::{ContentFetcher, FetchError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::warn;

/// Reader 抓取引擎
///
/// 对 `endpoint + url` 发起一次 GET，由远端服务返回渲染后的页面文本。
/// 所有请求共享同一个 `reqwest::Client` 连接池。
#[derive(Debug, Clone)]
pub struct ReaderEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl ReaderEngine {
    /// 使用现成的客户端创建引擎
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// 根据配置构建客户端与引擎
    ///
    /// # 返回值
    ///
    /// * `Ok(ReaderEngine)` - 构建好的引擎
    /// * `Err(reqwest::Error)` - 客户端构建失败（例如 TLS 后端初始化失败）
    pub fn from_settings(settings: &ReaderSettings) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        for (k, v) in &settings.headers {
            match (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                (Ok(k), Ok(v)) => {
                    headers.insert(k, v);
                }
                _ => warn!(header = %k, "Ignoring invalid reader header"),
            }
        }

        if let Some(key) = settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            match HeaderValue::from_str(&format!("Bearer {}", key)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Ignoring reader API key with invalid characters"),
            }
        }

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self::new(client, settings.endpoint.clone()))
    }

    /// 拼接请求地址，目标URL原样附加在端点之后
    pub fn request_url(&self, url: &str) -> String {
        format!("{}{}", self.endpoint, url)
    }
}

#[async_trait]
impl ContentFetcher for ReaderEngine {
    /// 执行抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - HTTP 200 时的响应文本
    /// * `Err(FetchError)` - 其他状态码、传输错误或超时
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(self.request_url(url)).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    fn name(&self) -> &'static str {
        "reader"
    }
}

#[cfg(test)]
#[path = "reader_engine_test.rs"]
mod tests;
