// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

/// 一个域名的汇总文档
///
/// 每次运行都完整重建，不做增量修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSummary {
    pub domain: String,
    /// 按文件名排序后被收录的内容文件
    pub files: Vec<String>,
    /// 写入磁盘的完整文本
    pub body: String,
    /// 汇总文件路径
    pub path: PathBuf,
}

impl DomainSummary {
    pub fn block_count(&self) -> usize {
        self.files.len()
    }
}
