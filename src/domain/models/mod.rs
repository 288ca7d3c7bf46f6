// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 赛季标识（edition）：源站为每个赛季和阶段分配的内部标识
/// - 比赛（fixture）：一场比赛的日期、双方球队和比分
/// - 响应体（payload）：冠军查询和轮次查询的返回结构
///
/// 所有实体只在单个请求内存在，不做任何持久化。
pub mod edition;
pub mod fixture;
pub mod payload;
