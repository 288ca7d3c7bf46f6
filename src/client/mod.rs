// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HTTP client for the service's own JSON API.

use crate::domain::models::payload::{ChampionResult, ErrorResult, RoundResult};
use serde::de::DeserializeOwned;
use std::fmt::Write as _;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// 服务端返回的 `erro` 消息
    #[error("{0}")]
    Api(String),
    #[error("unknown server error")]
    UnknownServer,
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// 巴甲 API 客户端
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// `GET /campeao/{ano}`
    pub async fn get_champion(&self, year: &str) -> Result<ChampionResult, ClientError> {
        let url = self.endpoint(&["campeao", year])?;
        self.get_json(url).await
    }

    /// `GET /jogos/{ano}/{rodada}`
    pub async fn get_matches(&self, year: &str, round: &str) -> Result<RoundResult, ClientError> {
        let url = self.endpoint(&["jogos", year, round])?;
        self.get_json(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "Requesting");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return match serde_json::from_slice::<ErrorResult>(&body) {
                Ok(err) => Err(ClientError::Api(err.error)),
                Err(_) => Err(ClientError::UnknownServer),
            };
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// 冠军查询的输出文本
pub fn render_champion(year: &str, result: &ChampionResult) -> String {
    if result.champion.is_empty() {
        format!("Ainda não houve campeão para o Brasileirão {}", year)
    } else {
        format!("Campeão do Brasileirão {}: {}", result.year, result.champion)
    }
}

/// 轮次查询的输出文本，每场比赛一行
pub fn render_round(year: &str, result: &RoundResult) -> String {
    if result.matches.is_empty() {
        return format!("Ainda não há jogos disponíveis para o Brasileirão {}", year);
    }

    let mut out = format!(
        "Jogos da rodada {} do Brasileirão {}:\n",
        result.round, result.year
    );
    for game in &result.matches {
        let _ = write!(
            out,
            "\n{}: {} {} {}",
            game.date, game.home.name, game.score, game.away.name
        );
    }
    out
}
