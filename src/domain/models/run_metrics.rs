// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::time::Duration;

/// 一次运行的统计数据
///
/// 只由流水线的顺序路由阶段修改，运行结束后交给调用方输出，不做持久化。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// 参与本次运行的URL数量
    pub total_urls: usize,
    pub successful: usize,
    pub failed: usize,
    /// 成功落盘内容的总字节数
    pub total_content_bytes: usize,
    /// 至少写入过一个文件的域名数量
    pub domains_touched: usize,
    pub summaries_written: usize,
    pub summaries_failed: usize,
    pub elapsed: Duration,
}

impl RunMetrics {
    pub fn new(total_urls: usize) -> Self {
        Self {
            total_urls,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self, bytes: usize) {
        self.successful += 1;
        self.total_content_bytes += bytes;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn record_summary(&mut self, written: bool) {
        if written {
            self.summaries_written += 1;
        } else {
            self.summaries_failed += 1;
        }
    }

    /// 成功数与失败数之和是否等于URL总数
    pub fn is_balanced(&self) -> bool {
        self.successful + self.failed == self.total_urls
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed {} URLs in {:.2} seconds.",
            self.total_urls,
            self.elapsed.as_secs_f64()
        )?;
        writeln!(
            f,
            "Successful requests: {}, Failed requests: {}",
            self.successful, self.failed
        )?;
        write!(f, "Total content length: {} bytes", self.total_content_bytes)?;
        if self.summaries_written + self.summaries_failed > 0 {
            write!(
                f,
                "\nDomain summaries written: {}, failed: {}",
                self.summaries_written, self.summaries_failed
            )?;
        }
        Ok(())
    }
}
