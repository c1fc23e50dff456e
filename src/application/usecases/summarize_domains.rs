// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use crate::domain::models::DomainSummary;
use crate::domain::services::summarizer::{SummaryError, Summarizer};
use crate::utils::url_utils::is_safe_dir_name;

/// 单个域名的汇总结果
pub type DomainOutcome = (String, Result<DomainSummary, SummaryError>);

/// 不抓取、只重建已有域名目录汇总的用例
pub struct SummarizeDomainsUseCase {
    base_path: PathBuf,
    summarizer: Summarizer,
}

impl SummarizeDomainsUseCase {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            summarizer: Summarizer,
        }
    }

    /// 指定域名时只处理该域名，否则处理根目录下的全部域名目录
    ///
    /// 指定的域名必须是根目录下的一级目录名，不能借助 `..` 或路径分隔符跳出根目录。
    pub async fn execute(&self, domain: Option<&str>) -> Result<Vec<DomainOutcome>, SummaryError> {
        match domain {
            Some(domain) if !is_safe_dir_name(domain) => Ok(vec![(
                domain.to_string(),
                Err(SummaryError::InvalidDomain(domain.to_string())),
            )]),
            Some(domain) => {
                let result = self
                    .summarizer
                    .summarize(&self.base_path.join(domain), domain)
                    .await;
                Ok(vec![(domain.to_string(), result)])
            }
            None => self.summarizer.summarize_all(&self.base_path).await,
        }
    }
}
