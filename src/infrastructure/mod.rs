// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 本地文件存储、URL列表读取与指标上报
pub mod metrics;
pub mod storage;
pub mod url_list;
