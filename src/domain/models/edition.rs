// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 赛季标识
///
/// 源站年份下拉框中某一年对应的 option 值，不透明字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionId(String);

/// 阶段标识
///
/// 赛季页面隐藏字段 `fase` 的值，只在所属赛季内有效
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseId(String);

impl EditionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PhaseId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
