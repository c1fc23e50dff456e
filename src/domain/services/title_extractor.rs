// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 标题行前缀
pub const TITLE_PREFIX: &str = "Title: ";

/// 无法取得标题时使用的占位标题
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// 从内容的第一行提取标题
///
/// 只检查第一行：以 `Title: ` 开头时返回其余部分（去掉首尾空白），
/// 否则返回 [`UNKNOWN_TITLE`]。空内容或空标题同样返回占位标题。
pub fn extract_title(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();

    first_line
        .strip_prefix(TITLE_PREFIX)
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(UNKNOWN_TITLE)
        .to_string()
}
