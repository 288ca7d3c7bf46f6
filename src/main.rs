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

use brasileirao_api::config::scraper::ScraperConfig;
use brasileirao_api::config::settings::Settings;
use brasileirao_api::domain::services::brasileirao_service::BrasileiraoService;
use brasileirao_api::engines::reqwest_engine::ReqwestEngine;
use brasileirao_api::engines::traits::ScraperEngine;
use brasileirao_api::infrastructure::metrics;
use brasileirao_api::infrastructure::ogol::OgolSource;
use brasileirao_api::presentation::routes;
use brasileirao_api::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.log);
    info!("Starting brasileirao-api v{}...", env!("CARGO_PKG_VERSION"));

    // 3. Initialize Prometheus Metrics
    if settings.metrics.enabled {
        metrics::init_metrics(&settings.metrics.listen_addr);
    }

    // 4. Initialize Components
    let scraper_config = ScraperConfig::try_from(&settings.scraper)?;
    let engine: Arc<dyn ScraperEngine> = Arc::new(ReqwestEngine::new(&scraper_config)?);
    info!(
        engine = engine.name(),
        base_url = %scraper_config.base_url(),
        "Scraper engine initialized"
    );
    let source = Arc::new(OgolSource::new(engine, scraper_config));
    let service = Arc::new(BrasileiraoService::new(source));
    info!(source = service.source_name(), "Brasileirao service initialized");

    // 5. Start HTTP server
    let app = routes::routes(service);

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
