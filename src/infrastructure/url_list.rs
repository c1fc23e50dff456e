// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::domain::models::UrlEntry;
use crate::utils::errors::PipelineError;

/// 解析URL列表文本
///
/// 每行一个URL，去掉首尾空白；空行和以 `#` 开头的行被忽略。
pub fn parse_url_list(text: &str) -> Vec<UrlEntry> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let url = line.trim();
            (!url.is_empty() && !url.starts_with('#')).then_some((idx + 1, url))
        })
        .enumerate()
        .map(|(position, (line, url))| UrlEntry::new(position, line, url))
        .collect()
}

/// 读取URL列表文件
///
/// # 返回值
///
/// * `Ok(Vec<UrlEntry>)` - 至少包含一条URL
/// * `Err(PipelineError::InputMissing)` - 文件不存在
/// * `Err(PipelineError::EmptyInput)` - 文件中没有可用的URL
pub async fn load_url_list(path: &Path) -> Result<Vec<UrlEntry>, PipelineError> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PipelineError::InputMissing(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let entries = parse_url_list(&text);
    if entries.is_empty() {
        return Err(PipelineError::EmptyInput(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = entries.len(), "URL list loaded");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let text = "\u{feff}https://a.test/1\n\n   # comment\n#another\n  https://b.test/2  \r\n\t\n";
        let entries = parse_url_list(text);

        assert_eq!(
            entries,
            vec![
                UrlEntry::new(0, 1, "https://a.test/1"),
                UrlEntry::new(1, 5, "https://b.test/2"),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let entries = parse_url_list("https://a.test/\nhttps://a.test/\n");
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_url_list(&tmp.path().join("url.txt")).await.unwrap_err();
        assert!(matches!(err, PipelineError::InputMissing(_)));
        assert!(err.is_early_exit());
    }

    #[tokio::test]
    async fn test_file_with_only_comments_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("url.txt");
        fs::write(&path, "# nothing yet\n\n").await.unwrap();

        let err = load_url_list(&path).await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput(_)));
    }

    #[tokio::test]
    async fn test_load_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("url.txt");
        fs::write(&path, "https://a.test/\n# skip\nhttps://b.test/\n")
            .await
            .unwrap();

        let entries = load_url_list(&path).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].line, 3);
    }
}
