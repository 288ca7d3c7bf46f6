// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// ogol.com.br 页面解析
///
/// 纯函数，输入 HTML 文本，输出领域模型
pub mod parser;

/// 基于抓取引擎的 `CompetitionSource` 实现
pub mod ogol_source;

pub use ogol_source::OgolSource;
