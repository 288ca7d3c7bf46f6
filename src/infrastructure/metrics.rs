// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 在 `listen_addr` 上启动 Prometheus 导出器并注册应用指标。
/// 导出器启动失败（例如端口被占用）只记录日志，不影响服务。
pub fn init_metrics(listen_addr: &str) {
    let addr: SocketAddr = match listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "upstream_requests_total",
        "Total number of page fetches against the origin site"
    );
    describe_histogram!(
        "upstream_request_duration_seconds",
        "Duration of page fetches against the origin site in seconds"
    );
    describe_counter!(
        "api_requests_total",
        "Total number of API requests by route and status"
    );

    info!("Metrics exporter listening on {}", addr);
}
