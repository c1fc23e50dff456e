// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 性能基准测试套件
//!
//! 覆盖标题提取、文件名整理、汇总渲染以及完整的汇总落盘过程。

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use readerscrape::domain::services::summarizer::{render_summary, Summarizer};
use readerscrape::domain::services::title_extractor::extract_title;
use readerscrape::infrastructure::storage::sanitize_title;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn sample_page(i: usize) -> String {
    format!(
        "Title: Página número {i}: guía / notas\n\nURL Source: https://example.com/{i}\n\n{}",
        "Lorem ipsum dolor sit amet. ".repeat(200)
    )
}

/// 基准测试：标题提取与文件名整理
fn benchmark_titles(c: &mut Criterion) {
    let page = sample_page(1);
    let mut group = c.benchmark_group("titles");

    group.bench_function("extract_title", |b| {
        b.iter(|| extract_title(black_box(&page)))
    });
    group.bench_function("extract_and_sanitize", |b| {
        b.iter(|| sanitize_title(&extract_title(black_box(&page))))
    });
    group.bench_function("sanitize_long_title", |b| {
        let long = "Ünïcödé title with / slashes: and * stars ".repeat(10);
        b.iter(|| sanitize_title(black_box(&long)))
    });

    group.finish();
}

/// 基准测试：不同文件数量下的汇总渲染
fn benchmark_render_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_summary");

    for size in [10, 100, 1000].iter() {
        let files: Vec<(String, String)> = (0..*size)
            .map(|i| (format!("{:04}_Page {}.txt", i + 1, i), sample_page(i)))
            .collect();

        group.bench_with_input(BenchmarkId::new("in_memory", size), &files, |b, files| {
            b.iter(|| {
                render_summary(
                    "example.com",
                    files.iter().map(|(f, c)| (f.as_str(), c.as_str())),
                )
            })
        });
    }

    group.finish();
}

/// 基准测试：从磁盘读取域名目录并重写汇总文件
fn benchmark_summarize_dir(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("summarize_dir");

    for size in [10, 100].iter() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("example.com");
        std::fs::create_dir(&dir).unwrap();
        for i in 0..*size {
            std::fs::write(dir.join(format!("{:04}_Page {}.txt", i + 1, i)), sample_page(i))
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::new("files", size), &dir, |b, dir| {
            b.to_async(&rt)
                .iter(|| async { Summarizer.summarize(dir, "example.com").await.unwrap() })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_titles,
    benchmark_render_summary,
    benchmark_summarize_dir
);
criterion_main!(benches);
