// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::scraper::ScraperConfig;
use crate::domain::competition::source::{CompetitionSource, SourceError};
use crate::domain::models::edition::{EditionId, PhaseId};
use crate::domain::models::fixture::Match;
use crate::engines::traits::ScraperEngine;
use crate::infrastructure::ogol::parser;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// ogol.com.br 数据源
///
/// 通过抓取引擎获取页面，再交给 [`parser`] 解析。
/// 网络错误和非成功状态码都视为数据缺失，只记录日志。
pub struct OgolSource {
    engine: Arc<dyn ScraperEngine>,
    config: ScraperConfig,
}

impl OgolSource {
    pub fn new(engine: Arc<dyn ScraperEngine>, config: ScraperConfig) -> Self {
        Self { engine, config }
    }

    /// 抓取页面内容，失败时返回 `None`
    async fn get_page(&self, url: &Url) -> Option<String> {
        match self.engine.fetch(url).await {
            Ok(response) => {
                debug!(
                    %url,
                    status = response.status_code,
                    response_time_ms = response.response_time_ms,
                    "Page fetched"
                );
                Some(response.content)
            }
            Err(e) => {
                warn!(
                    engine = self.engine.name(),
                    %url,
                    upstream_unavailable = e.is_upstream_unavailable(),
                    "Failed to fetch page: {}",
                    e
                );
                None
            }
        }
    }

    fn invalid_base(&self) -> SourceError {
        SourceError::InvalidBaseUrl(self.config.base_url().to_string())
    }

    pub fn search_url(&self) -> Result<Url, SourceError> {
        self.config.search_url().ok_or_else(|| self.invalid_base())
    }

    /// `{base}/edicao/brasileirao-serie-a-{year}/{edition}`
    pub fn edition_url(&self, year: &str, edition: &EditionId) -> Result<Url, SourceError> {
        let slug = format!("brasileirao-serie-a-{}", year);
        self.config
            .page_url(&["edicao", &slug, edition.as_str()])
            .ok_or_else(|| self.invalid_base())
    }

    /// `{base}/edicao/campeonato-brasileiro-{year}/{edition}?jornada_in={round}&fase={phase}`
    pub fn matches_url(
        &self,
        year: &str,
        edition: &EditionId,
        round: &str,
        phase: &PhaseId,
    ) -> Result<Url, SourceError> {
        let slug = format!("campeonato-brasileiro-{}", year);
        let mut url = self
            .config
            .page_url(&["edicao", &slug, edition.as_str()])
            .ok_or_else(|| self.invalid_base())?;
        url.query_pairs_mut()
            .append_pair("jornada_in", round)
            .append_pair("fase", phase.as_str());
        Ok(url)
    }
}

#[async_trait]
impl CompetitionSource for OgolSource {
    async fn edition_id(&self, year: &str) -> Result<Option<EditionId>, SourceError> {
        let url = self.search_url()?;
        let Some(page) = self.get_page(&url).await else {
            return Ok(None);
        };

        let edition = parser::parse_edition_id(&page, year);
        debug!(year, found = edition.is_some(), "Parsed edition selector");
        Ok(edition)
    }

    async fn champion(
        &self,
        year: &str,
        edition: &EditionId,
    ) -> Result<Option<String>, SourceError> {
        let url = self.edition_url(year, edition)?;
        Ok(self
            .get_page(&url)
            .await
            .and_then(|page| parser::parse_champion(&page)))
    }

    async fn phase_id(
        &self,
        year: &str,
        edition: &EditionId,
    ) -> Result<Option<PhaseId>, SourceError> {
        let url = self.edition_url(year, edition)?;
        Ok(self
            .get_page(&url)
            .await
            .and_then(|page| parser::parse_phase_id(&page)))
    }

    async fn matches(
        &self,
        year: &str,
        edition: &EditionId,
        round: &str,
        phase: &PhaseId,
    ) -> Result<Option<Vec<Match>>, SourceError> {
        let url = self.matches_url(year, edition, round, phase)?;
        let Some(page) = self.get_page(&url).await else {
            return Ok(None);
        };

        let matches = parser::parse_matches(&page);
        debug!(
            year,
            round,
            count = matches.as_ref().map_or(0, Vec::len),
            "Parsed fixtures table"
        );
        Ok(matches)
    }

    fn name(&self) -> &'static str {
        "ogol"
    }
}
