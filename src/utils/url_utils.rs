// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// 域名解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("URL has no host component")]
    MissingHost,
}

/// 提取URL的域名部分（主机名，带端口时保留端口）
///
/// 协议、路径、查询串与用户信息都会被去掉，主机名会被 `url` 统一转为小写。
/// `url` 会把与协议默认端口相同的端口规范化掉，这里按原始文本补回显式写出的端口。
pub fn domain_of(raw: &str) -> Result<String, DomainError> {
    let raw = raw.trim();
    let url = Url::parse(raw)?;
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(DomainError::MissingHost)?;

    Ok(match url.port().or_else(|| explicit_port(raw)) {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// 原始URL的 authority 部分中显式写出的端口
fn explicit_port(raw: &str) -> Option<u16> {
    let (_, rest) = raw.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let (_, port) = host_port.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

/// 域名能否直接用作输出根目录下的一级目录名
///
/// 拒绝空串、`.`、`..` 以及任何路径分隔符，保证拼接后不会离开根目录。
pub fn is_safe_dir_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
