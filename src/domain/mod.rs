// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：比赛、积分榜冠军和轮次结果
/// - 数据源接口（competition）：赛事数据来源的抽象
/// - 服务（services）：串联各个解析步骤的编排服务
///
/// 领域层不依赖于任何外部实现，
/// 源站的具体抓取方式由基础设施层提供。
pub mod competition;
pub mod models;
pub mod services;
