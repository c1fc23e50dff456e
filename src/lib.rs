// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 抓取-归档-汇总流水线及单独的汇总重建用例
pub mod application;

/// 命令行模块
pub mod cli;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心数据模型与标题提取、汇总等领域服务
pub mod domain;

/// 引擎模块
///
/// Reader 服务抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 按域名组织的本地存储、URL列表读取与指标
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型、日志初始化与URL辅助函数
pub mod utils;
