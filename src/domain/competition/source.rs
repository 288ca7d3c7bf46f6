// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::edition::{EditionId, PhaseId};
use crate::domain::models::fixture::Match;
use async_trait::async_trait;
use thiserror::Error;

/// 数据源内部错误
///
/// 数据缺失用 `Ok(None)` 表示，这里只放无法继续处理的情况
#[derive(Debug, Error, Clone)]
pub enum SourceError {
    #[error("Base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),
    #[error("Source error: {0}")]
    Other(String),
}

/// 赛事数据源
///
/// 每一步都依赖上一步的结果，调用方按顺序串联
#[async_trait]
pub trait CompetitionSource: Send + Sync {
    /// Resolves the edition identifier listed for `year` in the search form.
    async fn edition_id(&self, year: &str) -> Result<Option<EditionId>, SourceError>;

    /// Name of the team in first place of the edition's standings.
    async fn champion(&self, year: &str, edition: &EditionId)
        -> Result<Option<String>, SourceError>;

    /// Round-robin phase identifier of the edition.
    async fn phase_id(&self, year: &str, edition: &EditionId)
        -> Result<Option<PhaseId>, SourceError>;

    /// Matches of one round, in table order. `None` when none could be read.
    async fn matches(
        &self,
        year: &str,
        edition: &EditionId,
        round: &str,
        phase: &PhaseId,
    ) -> Result<Option<Vec<Match>>, SourceError>;

    /// 数据源名称
    fn name(&self) -> &'static str;
}
