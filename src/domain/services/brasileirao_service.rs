// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::competition::source::{CompetitionSource, SourceError};
use crate::domain::models::payload::{ChampionResult, RoundResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone)]
pub enum BrasileiraoServiceError {
    #[error("Valor não encontrado para o ano {0}")]
    EditionNotFound(String),
    #[error("Dados do campeão não encontrados")]
    ChampionNotFound,
    #[error("ID da fase não encontrado")]
    PhaseNotFound,
    #[error("Dados da rodada {0} não encontrados")]
    RoundNotFound(String),
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl BrasileiraoServiceError {
    /// 是否属于数据缺失（而非内部错误）
    pub fn is_not_found(&self) -> bool {
        !matches!(self, BrasileiraoServiceError::Source(_))
    }
}

/// 巴甲查询服务
///
/// 按请求串联数据源的各个步骤：
/// - 冠军：赛季标识 → 积分榜第一名
/// - 轮次：赛季标识 → 阶段标识 → 比赛列表
///
/// 任一步缺失即终止，不做重试，也不缓存中间结果
pub struct BrasileiraoService {
    source: Arc<dyn CompetitionSource>,
}

impl BrasileiraoService {
    pub fn new(source: Arc<dyn CompetitionSource>) -> Self {
        Self { source }
    }

    /// 查询某一年的冠军
    pub async fn champion(&self, year: &str) -> Result<ChampionResult, BrasileiraoServiceError> {
        let edition = self
            .source
            .edition_id(year)
            .await?
            .ok_or_else(|| BrasileiraoServiceError::EditionNotFound(year.to_string()))?;
        debug!(year, %edition, "Resolved edition");

        let champion = self
            .source
            .champion(year, &edition)
            .await?
            .ok_or(BrasileiraoServiceError::ChampionNotFound)?;

        Ok(ChampionResult {
            year: year.to_string(),
            champion,
        })
    }

    /// 查询某一年某一轮的全部比赛
    pub async fn round(
        &self,
        year: &str,
        round: &str,
    ) -> Result<RoundResult, BrasileiraoServiceError> {
        let edition = self
            .source
            .edition_id(year)
            .await?
            .ok_or_else(|| BrasileiraoServiceError::EditionNotFound(year.to_string()))?;
        debug!(year, %edition, "Resolved edition");

        let phase = self
            .source
            .phase_id(year, &edition)
            .await?
            .ok_or(BrasileiraoServiceError::PhaseNotFound)?;
        debug!(year, %phase, "Resolved phase");

        let matches = self
            .source
            .matches(year, &edition, round, &phase)
            .await?
            .filter(|matches| !matches.is_empty())
            .ok_or_else(|| BrasileiraoServiceError::RoundNotFound(round.to_string()))?;

        Ok(RoundResult {
            year: year.to_string(),
            round: round.to_string(),
            matches,
        })
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}

#[cfg(test)]
#[path = "brasileirao_service_test.rs"]
mod tests;
