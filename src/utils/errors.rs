// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// 流水线错误类型
///
/// 只有输入相关的错误会中止整个运行，单个URL或单个域名的失败
/// 在流水线内部被记录并计数，不会以错误的形式向外传播。
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("URL list file '{}' not found", .0.display())]
    InputMissing(PathBuf),

    #[error("URL list file '{}' contains no URLs", .0.display())]
    EmptyInput(PathBuf),

    #[error("failed to read URL list: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl PipelineError {
    /// 是否属于“无输入可处理”的提前结束，调用方应当给出提示后正常退出
    pub fn is_early_exit(&self) -> bool {
        matches!(
            self,
            PipelineError::InputMissing(_) | PipelineError::EmptyInput(_)
        )
    }
}
