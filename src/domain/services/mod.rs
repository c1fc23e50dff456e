// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务
///
/// 标题提取与域名汇总
pub mod summarizer;
pub mod title_extractor;
