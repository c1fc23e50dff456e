// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志格式环境变量，取值为 `json` 时输出结构化日志
pub const LOG_FORMAT_ENV: &str = "READERSCRAPE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info,readerscrape=debug";

/// 初始化 tracing 订阅器
///
/// 过滤规则取自 `RUST_LOG`，缺省为 `info,readerscrape=debug`。
/// 重复调用是安全的，第二次起的初始化会被忽略。
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Telemetry already initialized: {}", e);
    }
}
