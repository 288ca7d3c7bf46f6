// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取器运行时配置
///
/// 由配置设置派生，进程启动后只读共享
pub mod scraper;

/// 配置模块
///
/// 处理应用程序的配置设置，包括服务器、抓取器和指标配置
pub mod settings;
