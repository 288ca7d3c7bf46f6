// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 一支球队在一场比赛中的名称和进球数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamScore {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "gols")]
    pub goals: u32,
}

/// 比赛
///
/// 日期可能继承自结果表中上一行，`score` 总是由双方进球数生成
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "mandante")]
    pub home: TeamScore,
    #[serde(rename = "visitante")]
    pub away: TeamScore,
    #[serde(rename = "placar")]
    pub score: String,
}

impl Match {
    pub fn new(
        date: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            date: date.into(),
            home: TeamScore {
                name: home_team.into(),
                goals: home_goals,
            },
            away: TeamScore {
                name: away_team.into(),
                goals: away_goals,
            },
            score: format!("{}-{}", home_goals, away_goals),
        }
    }
}
