// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// API客户端模块
///
/// 调用本服务JSON接口的HTTP客户端，供命令行工具使用
pub mod client;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、数据源接口和查询服务
pub mod domain;

/// 引擎模块
///
/// 实现抓取源站页面的HTTP引擎
pub mod engines;

/// 基础设施模块
///
/// 提供源站适配和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
