// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::scraper::ScraperConfig;
use crate::engines::traits::{EngineError, ScrapeResponse, ScraperEngine};
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎，整个进程共用一个带连接池的客户端
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 按抓取器配置创建引擎
    ///
    /// # 参数
    ///
    /// * `config` - 抓取器配置，提供 User-Agent 和超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 创建成功
    /// * `Err(EngineError)` - User-Agent 非法或客户端构建失败
    pub fn new(config: &ScraperConfig) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(config.user_agent())
            .map_err(|e| EngineError::Other(format!("Invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("pt-BR,pt;q=0.9"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ScraperEngine for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标地址
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeResponse)` - 2xx 响应
    /// * `Err(EngineError)` - 网络错误、非成功状态码或读取响应体失败
    async fn fetch(&self, url: &Url) -> Result<ScrapeResponse, EngineError> {
        let start = Instant::now();
        let result = self.send(url).await;

        let elapsed = start.elapsed();
        histogram!("upstream_request_duration_seconds").record(elapsed.as_secs_f64());
        let outcome = if result.is_ok() { "success" } else { "failure" };
        counter!("upstream_requests_total", "outcome" => outcome).increment(1);

        result.map(|(status_code, content)| {
            debug!(%url, status_code, elapsed_ms = elapsed.as_millis() as u64, "Fetched page");
            ScrapeResponse {
                status_code,
                content,
                response_time_ms: elapsed.as_millis() as u64,
            }
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

impl ReqwestEngine {
    async fn send(&self, url: &Url) -> Result<(u16, String), EngineError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status(status.as_u16()));
        }

        let content = response.text().await?;
        Ok((status.as_u16(), content))
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
