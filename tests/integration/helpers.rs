// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use readerscrape::application::usecases::run_pipeline::{PipelineOptions, PipelineOrchestrator};
use readerscrape::config::settings::{NamingStrategy, ReaderSettings};
use readerscrape::engines::reader_engine::ReaderEngine;
use readerscrape::infrastructure::storage::DomainStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub reader: MockServer,
    pub workdir: TempDir,
}

impl TestApp {
    pub async fn start() -> Self {
        Self {
            reader: MockServer::start().await,
            workdir: TempDir::new().unwrap(),
        }
    }

    pub fn output(&self) -> PathBuf {
        self.workdir.path().join("scrape")
    }

    pub fn input(&self) -> PathBuf {
        self.workdir.path().join("url.txt")
    }

    pub fn write_input(&self, lines: &[&str]) {
        std::fs::write(self.input(), lines.join("\n")).unwrap();
    }

    /// Reader 对 `target` 返回指定状态码与内容
    pub async fn serve(&self, target: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{}", target)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&self.reader)
            .await;
    }

    pub fn pipeline(&self, concurrency: usize, summarize: bool) -> PipelineOrchestrator {
        let settings = ReaderSettings {
            endpoint: format!("{}/", self.reader.uri()),
            timeout_secs: 5,
            user_agent: "readerscrape-it".to_string(),
            api_key: None,
            headers: HashMap::new(),
        };
        let engine = ReaderEngine::from_settings(&settings).unwrap();
        PipelineOrchestrator::new(
            Arc::new(engine),
            DomainStore::new(self.output(), NamingStrategy::Sequence),
            PipelineOptions {
                concurrency,
                summarize,
                show_progress: false,
            },
        )
    }
}

/// 列出目录中的文件名（排序后）
pub fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}
