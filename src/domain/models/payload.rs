// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fixture::Match;
use serde::{Deserialize, Serialize};

/// 冠军查询结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChampionResult {
    #[serde(rename = "ano")]
    pub year: String,
    #[serde(rename = "campeao")]
    pub champion: String,
}

/// 轮次查询结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    #[serde(rename = "ano")]
    pub year: String,
    #[serde(rename = "rodada")]
    pub round: String,
    #[serde(rename = "jogos", default)]
    pub matches: Vec<Match>,
}

/// 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResult {
    #[serde(rename = "erro")]
    pub error: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
