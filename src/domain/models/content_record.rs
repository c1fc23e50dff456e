// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

/// 已落盘的一份页面内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    /// 所属域名
    pub domain: String,
    /// 文件名（`<序号或时间戳>_<标题>.txt`）
    pub filename: String,
    /// 完整路径
    pub path: PathBuf,
    /// 内容字节数
    pub bytes: usize,
}
