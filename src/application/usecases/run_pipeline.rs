// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use crate::config::settings::PipelineSettings;
use crate::domain::models::{FetchResult, RunMetrics, UrlEntry};
use crate::domain::services::summarizer::Summarizer;
use crate::engines::traits::ContentFetcher;
use crate::infrastructure::metrics as run_counters;
use crate::infrastructure::storage::DomainStore;
use crate::infrastructure::url_list::load_url_list;
use crate::utils::errors::PipelineError;

// === Section: Options ===

/// 流水线运行选项
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// 同时进行中的请求上限，最小为1
    pub concurrency: usize,
    /// 是否在路由结束后重建域名汇总
    pub summarize: bool,
    /// 是否显示进度条
    pub show_progress: bool,
}

impl PipelineOptions {
    pub fn from_settings(settings: &PipelineSettings) -> Self {
        Self {
            concurrency: settings.concurrency,
            summarize: settings.summarize,
            show_progress: false,
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            summarize: true,
            show_progress: false,
        }
    }
}

// === Section: Orchestrator ===

/// 抓取-归档-汇总流水线
///
/// 加载 → 并发抓取 → 顺序路由落盘 → 按域名汇总 → 输出统计。
/// 没有阶段回退，也没有重试。
pub struct PipelineOrchestrator {
    fetcher: Arc<dyn ContentFetcher>,
    store: DomainStore,
    summarizer: Summarizer,
    options: PipelineOptions,
}

impl PipelineOrchestrator {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, store: DomainStore, options: PipelineOptions) -> Self {
        Self {
            fetcher,
            store,
            summarizer: Summarizer,
            options,
        }
    }

    pub fn store(&self) -> &DomainStore {
        &self.store
    }

    /// 从URL列表文件执行一次完整运行
    ///
    /// # 返回值
    ///
    /// * `Ok(RunMetrics)` - 运行统计，单个URL或域名的失败已计入其中
    /// * `Err(PipelineError)` - 输入文件缺失、为空或无法读取，此时不会发出任何请求
    pub async fn run(&mut self, input: &Path) -> Result<RunMetrics, PipelineError> {
        let started = Instant::now();
        let entries = load_url_list(input).await?;
        info!(count = entries.len(), input = %input.display(), "Starting run");

        let mut metrics = self.process(entries).await;
        metrics.elapsed = started.elapsed();
        Ok(metrics)
    }

    /// 处理已加载的条目
    pub async fn process(&mut self, entries: Vec<UrlEntry>) -> RunMetrics {
        let started = Instant::now();
        let mut metrics = RunMetrics::new(entries.len());

        let results = self.fetch_all(entries).await;
        for result in results {
            self.route(result, &mut metrics).await;
        }
        metrics.domains_touched = self.store.touched_domains().count();

        if self.options.summarize {
            self.summarize_touched(&mut metrics).await;
        }

        metrics.elapsed = started.elapsed();
        metrics
    }

    /// 并发抓取全部条目
    ///
    /// 结果按完成顺序到达，返回前按条目位置重新排序，
    /// 保证后续落盘顺序与并发度无关。
    pub async fn fetch_all(&self, entries: Vec<UrlEntry>) -> Vec<FetchResult> {
        let progress = self.progress_bar(entries.len());

        let mut results: Vec<FetchResult> = stream::iter(entries)
            .map(|entry| {
                let fetcher = Arc::clone(&self.fetcher);
                async move { fetch_one(fetcher.as_ref(), entry).await }
            })
            .buffer_unordered(self.options.concurrency.max(1))
            .inspect(|_| progress.inc(1))
            .collect()
            .await;

        progress.finish_and_clear();
        results.sort_by_key(|r| r.entry.position);
        results
    }

    async fn route(&mut self, result: FetchResult, metrics: &mut RunMetrics) {
        let outcome = match (&result.domain, &result.content) {
            (Some(domain), Some(content)) => match self.store.persist(domain, content).await {
                Ok(record) => {
                    metrics.record_success(record.bytes);
                    run_counters::record_content_bytes(record.bytes);
                    info!(
                        url = %result.url(),
                        path = %record.path.display(),
                        bytes = record.bytes,
                        "Content saved"
                    );
                    "success"
                }
                Err(e) => {
                    error!(url = %result.url(), domain = %domain, error = %e, "Failed to persist content");
                    metrics.record_failure();
                    "persist_failed"
                }
            },
            _ => {
                metrics.record_failure();
                debug!(
                    url = %result.url(),
                    line = result.entry.line,
                    reason = result.error.as_deref().unwrap_or("unknown"),
                    "URL counted as failed"
                );
                "fetch_failed"
            }
        };

        run_counters::record_fetch(outcome, result.elapsed);
    }

    async fn summarize_touched(&mut self, metrics: &mut RunMetrics) {
        let domains: Vec<String> = self.store.touched_domains().map(str::to_owned).collect();

        for domain in domains {
            let dir = self.store.domain_dir(&domain);
            match self.summarizer.summarize(&dir, &domain).await {
                Ok(summary) => {
                    metrics.record_summary(true);
                    run_counters::record_summary("written");
                    info!(
                        domain = %domain,
                        blocks = summary.block_count(),
                        path = %summary.path.display(),
                        "Domain summary regenerated"
                    );
                }
                Err(e) => {
                    metrics.record_summary(false);
                    run_counters::record_summary("failed");
                    error!(domain = %domain, error = %e, "Failed to write domain summary");
                }
            }
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.options.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "Processing URLs {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta_precise}]",
        ) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.enable_steady_tick(Duration::from_millis(200));
        bar
    }
}

/// 抓取单个条目，任何失败都转换为失败结果而不是错误
async fn fetch_one(fetcher: &dyn ContentFetcher, entry: UrlEntry) -> FetchResult {
    let started = Instant::now();

    let domain = match DomainStore::domain_for_url(&entry.url) {
        Ok(domain) => domain,
        Err(e) => {
            warn!(url = %entry.url, line = entry.line, error = %e, "Skipping URL without usable domain");
            return FetchResult::failed(entry, None, e.to_string(), started.elapsed());
        }
    };

    match fetcher.fetch(&entry.url).await {
        Ok(content) if content.is_empty() => {
            warn!(url = %entry.url, "Reader returned an empty body");
            FetchResult::failed(entry, Some(domain), "empty response body", started.elapsed())
        }
        Ok(content) => FetchResult::succeeded(entry, domain, content, started.elapsed()),
        Err(e) => {
            warn!(
                url = %entry.url,
                engine = fetcher.name(),
                kind = e.kind(),
                error = %e,
                "Fetch failed"
            );
            FetchResult::failed(entry, Some(domain), e.to_string(), started.elapsed())
        }
    }
}

#[cfg(test)]
#[path = "run_pipeline_test.rs"]
mod tests;
