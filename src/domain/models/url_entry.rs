// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// URL 列表中的一条有效记录
///
/// 加载时创建，在一次运行中只被消费一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// 在本次运行中的位置（从0开始），用于把乱序完成的结果对应回原始条目
    pub position: usize,
    /// 源文件中的行号（从1开始）
    pub line: usize,
    /// 去掉首尾空白后的URL
    pub url: String,
}

impl UrlEntry {
    pub fn new(position: usize, line: usize, url: impl Into<String>) -> Self {
        Self {
            position,
            line,
            url: url.into(),
        }
    }
}
