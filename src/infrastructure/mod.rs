// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus 指标导出
/// - 源站适配（ogol）：抓取 ogol.com.br 页面并解析赛季、冠军、阶段和比赛
///
/// 基础设施层依赖于领域层的抽象接口（`CompetitionSource`），
/// 确保领域层不受源站 HTML 结构的影响。
pub mod metrics;
pub mod ogol;
