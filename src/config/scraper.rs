// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{ScraperSettings, DEFAULT_USER_AGENT};
use std::time::Duration;
use url::Url;

/// 抓取器配置
///
/// 持有源站根地址、派生的搜索页地址和固定的出站请求头，创建后不再修改
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    base_url: Url,
    user_agent: String,
    timeout: Duration,
}

impl ScraperConfig {
    pub fn new(base_url: Url, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url,
            user_agent: user_agent.into(),
            timeout,
        }
    }

    /// Builds a config pointing at `base_url` with the default header set.
    pub fn with_base_url(base_url: Url) -> Self {
        Self::new(base_url, DEFAULT_USER_AGENT, Duration::from_secs(30))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Appends percent-encoded path segments to the base URL.
    ///
    /// Returns `None` when the base URL cannot carry a path (e.g. `mailto:`).
    pub fn page_url(&self, segments: &[&str]) -> Option<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(segments);
        Some(url)
    }

    /// 赛事搜索页地址，其中包含年份下拉框
    pub fn search_url(&self) -> Option<Url> {
        let mut url = self.page_url(&["competicao", "brasileirao"])?;
        url.query_pairs_mut().append_pair("search", "1");
        Some(url)
    }
}

impl TryFrom<&ScraperSettings> for ScraperConfig {
    type Error = url::ParseError;

    fn try_from(settings: &ScraperSettings) -> Result<Self, Self::Error> {
        let base_url = Url::parse(&settings.base_url)?;
        Ok(Self::new(
            base_url,
            settings.user_agent.clone(),
            Duration::from_secs(settings.timeout_secs),
        ))
    }
}
