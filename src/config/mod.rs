// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理 Reader 端点、输入文件、输出目录与并发度等配置
pub mod settings;
