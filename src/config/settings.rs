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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Reader 服务配置
    pub reader: ReaderSettings,
    /// 输入配置
    pub input: InputSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 流水线配置
    pub pipeline: PipelineSettings,
}

/// Reader 服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderSettings {
    /// 端点前缀，目标URL直接拼接在其后
    pub endpoint: String,
    /// 单个请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent 请求头
    pub user_agent: String,
    /// 可选的 Bearer 令牌
    pub api_key: Option<String>,
    /// 附加请求头，例如 `X-Return-Format`
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ReaderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 输入配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    /// URL 列表文件路径
    pub path: PathBuf,
}

/// 内容文件名中唯一标识部分的生成方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// 按域名递增的序号，从目录中已有的最大序号之后继续
    #[default]
    Sequence,
    /// Unix 时间戳（秒），冲突时追加后缀
    Timestamp,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 输出根目录
    pub base_path: PathBuf,
    /// 文件命名方式
    #[serde(default)]
    pub naming: NamingStrategy,
}

/// 流水线配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    /// 同时进行中的请求上限
    pub concurrency: usize,
    /// 运行结束时是否重新生成域名汇总
    pub summarize: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值 → `config/default` → `config/{APP_ENVIRONMENT}`
    /// → 环境变量 `READERSCRAPE__*`
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// 与 [`Settings::new`] 相同，但在环境变量之前额外叠加一个显式指定的配置文件
    pub fn load(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mut builder = Config::builder()
            .set_default("reader.endpoint", "https://r.jina.ai/")?
            .set_default("reader.timeout_secs", 60)?
            .set_default(
                "reader.user_agent",
                concat!("readerscrape/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("input.path", "url.txt")?
            .set_default("storage.base_path", "scrape")?
            .set_default("storage.naming", "sequence")?
            .set_default("pipeline.concurrency", 8)?
            .set_default("pipeline.summarize", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix("READERSCRAPE").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reader.endpoint.trim().is_empty() {
            return Err(ConfigError::Message(
                "reader.endpoint must not be empty".to_string(),
            ));
        }
        if self.pipeline.concurrency == 0 {
            return Err(ConfigError::Message(
                "pipeline.concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
