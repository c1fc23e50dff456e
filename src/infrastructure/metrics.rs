// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};

pub const FETCH_TOTAL: &str = "readerscrape_fetch_total";
pub const FETCH_DURATION: &str = "readerscrape_fetch_duration_seconds";
pub const CONTENT_BYTES_TOTAL: &str = "readerscrape_content_bytes_total";
pub const SUMMARIES_TOTAL: &str = "readerscrape_summaries_total";

/// 注册指标描述
///
/// 本 crate 不安装任何 recorder；嵌入方安装 recorder 后即可收集这些指标，
/// 否则所有记录调用都是空操作。
pub fn describe_metrics() {
    describe_counter!(FETCH_TOTAL, "Number of URLs processed, labeled by outcome");
    describe_histogram!(FETCH_DURATION, "Latency of reader requests in seconds");
    describe_counter!(CONTENT_BYTES_TOTAL, "Bytes of content persisted to disk");
    describe_counter!(SUMMARIES_TOTAL, "Domain summaries regenerated, labeled by outcome");
}

/// 记录一个URL的处理结果
pub fn record_fetch(outcome: &'static str, elapsed: Duration) {
    counter!(FETCH_TOTAL, "outcome" => outcome).increment(1);
    histogram!(FETCH_DURATION).record(elapsed.as_secs_f64());
}

pub fn record_content_bytes(bytes: usize) {
    counter!(CONTENT_BYTES_TOTAL).increment(bytes as u64);
}

pub fn record_summary(outcome: &'static str) {
    counter!(SUMMARIES_TOTAL, "outcome" => outcome).increment(1);
}
