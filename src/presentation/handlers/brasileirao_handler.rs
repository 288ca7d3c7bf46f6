// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    Json,
};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    domain::{
        models::payload::{ChampionResult, RoundResult},
        services::brasileirao_service::{BrasileiraoService, BrasileiraoServiceError},
    },
    presentation::errors::AppError,
};

/// 查询某一年某一轮的比赛
///
/// # 参数
///
/// * `service` - 巴甲查询服务
/// * `ano` - 年份，按原样与源站下拉框文本比较
/// * `rodada` - 轮次
///
/// # 返回值
///
/// 成功时返回 `{ano, rodada, jogos}`
///
/// # 错误
///
/// - 任一步数据缺失或没有比赛：404
/// - 数据源内部错误：500
pub async fn get_round(
    Extension(service): Extension<Arc<BrasileiraoService>>,
    Path((ano, rodada)): Path<(String, String)>,
) -> Result<Json<RoundResult>, AppError> {
    let result = service.round(&ano, &rodada).await;
    let response = match result {
        Ok(round) if !round.matches.is_empty() => Ok(Json(round)),
        Ok(_) => Err(no_matches(&ano)),
        Err(e) => Err(map_error(e, || no_matches(&ano))),
    };

    record("jogos", &response);
    response
}

/// 查询某一年的冠军
///
/// # 参数
///
/// * `service` - 巴甲查询服务
/// * `ano` - 年份
///
/// # 返回值
///
/// 成功时返回 `{ano, campeao}`
///
/// # 错误
///
/// - 赛季或积分榜缺失、冠军为空：404
/// - 数据源内部错误：500
pub async fn get_champion(
    Extension(service): Extension<Arc<BrasileiraoService>>,
    Path(ano): Path<String>,
) -> Result<Json<ChampionResult>, AppError> {
    let result = service.champion(&ano).await;
    let response = match result {
        Ok(champion) if !champion.champion.is_empty() => Ok(Json(champion)),
        Ok(_) => Err(no_champion(&ano)),
        Err(e) => Err(map_error(e, || no_champion(&ano))),
    };

    record("campeao", &response);
    response
}

fn no_matches(year: &str) -> AppError {
    AppError::NotFound(format!("Não foram encontrados jogos para o ano {}", year))
}

fn no_champion(year: &str) -> AppError {
    AppError::NotFound(format!("Ainda não houve campeão para o Brasileirão {}", year))
}

/// Missing data collapses into the route's own 404 message; the step that
/// failed is only logged.
fn map_error(err: BrasileiraoServiceError, not_found: impl FnOnce() -> AppError) -> AppError {
    if err.is_not_found() {
        debug!("Lookup stopped: {}", err);
        not_found()
    } else {
        error!("Lookup failed: {}", err);
        AppError::Internal(err.to_string())
    }
}

fn record<T>(route: &'static str, response: &Result<T, AppError>) {
    let status = match response {
        Ok(_) => "200",
        Err(AppError::NotFound(_)) => "404",
        Err(AppError::Internal(_)) => "500",
    };
    counter!("api_requests_total", "route" => route, "status" => status).increment(1);
}
