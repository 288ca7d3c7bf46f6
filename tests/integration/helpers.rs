// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use axum_test::TestServer;
use brasileirao_api::config::scraper::ScraperConfig;
use brasileirao_api::domain::services::brasileirao_service::BrasileiraoService;
use brasileirao_api::engines::reqwest_engine::ReqwestEngine;
use brasileirao_api::infrastructure::ogol::OgolSource;
use brasileirao_api::presentation::routes;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EDITION_2022: &str = "150000";
pub const EDITION_2023: &str = "170000";
pub const PHASE_2022: &str = "180000";

pub const SEARCH_PAGE: &str = r#"
<html><body>
  <form>
    <select id="id_edicao" name="id_edicao">
      <option value="">Edição</option>
      <option value="170000">2023</option>
      <option value="150000">2022</option>
    </select>
  </form>
</body></html>
"#;

/// 2022 赛季页：积分榜和阶段字段都存在
pub const EDITION_PAGE_2022: &str = r#"
<html><body>
  <input type="hidden" name="fase" value="180000">
  <div id="edition_table">
    <table>
      <thead><tr><th>#</th><th></th><th>Equipe</th><th>P</th></tr></thead>
      <tbody>
        <tr><td>1</td><td></td><td><a href="/equipe/palmeiras">Palmeiras</a></td><td>81</td></tr>
        <tr><td>2</td><td></td><td><a href="/equipe/internacional">Internacional</a></td><td>73</td></tr>
      </tbody>
    </table>
  </div>
</body></html>
"#;

/// 2023 赛季页：还没有积分榜
pub const EDITION_PAGE_2023: &str = r#"
<html><body>
  <input type="hidden" name="fase" value="190000">
  <div id="calendar">Em breve</div>
</body></html>
"#;

/// 第10轮结果：五场有效比赛，同日比赛只在第一行写日期
pub const FIXTURES_PAGE_2022_R10: &str = r#"
<html><body>
  <div id="fixture_games">
    <table class="zztable stats">
      <tbody>
        <tr><td>2022-06-04</td><td><a>Flamengo</a></td><td>-</td><td><a>2-1</a></td><td>-</td><td><a>Vasco</a></td></tr>
        <tr><td></td><td><a>Santos</a></td><td>-</td><td><a>0-0</a></td><td>-</td><td><a>Bahia</a></td></tr>
        <tr><td colspan="6">Intervalo</td></tr>
        <tr><td>2022-06-05</td><td><a>Palmeiras</a></td><td>-</td><td><a>3-0</a></td><td>-</td><td><a>Goiás</a></td></tr>
        <tr><td></td><td><a>Corinthians</a></td><td>-</td><td><a>1-1</a></td><td>-</td><td><a>Fortaleza</a></td></tr>
        <tr><td></td><td><a>Ceará</a></td><td>-</td><td><a>adiado</a></td><td>-</td><td><a>Cuiabá</a></td></tr>
        <tr><td>2022-06-06</td><td><a>Grêmio</a></td><td>-</td><td><a>0-2</a></td><td>-</td><td><a>Botafogo</a></td></tr>
      </tbody>
    </table>
  </div>
</body></html>
"#;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub origin: MockServer,
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html; charset=utf-8")
}

/// 启动模拟源站，挂载搜索页、赛季页和第10轮结果页
pub async fn start_origin() -> MockServer {
    let origin = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/competicao/brasileirao"))
        .and(query_param("search", "1"))
        .respond_with(html(SEARCH_PAGE))
        .mount(&origin)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/edicao/brasileirao-serie-a-2022/{}",
            EDITION_2022
        )))
        .respond_with(html(EDITION_PAGE_2022))
        .mount(&origin)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/edicao/brasileirao-serie-a-2023/{}",
            EDITION_2023
        )))
        .respond_with(html(EDITION_PAGE_2023))
        .mount(&origin)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/edicao/campeonato-brasileiro-2022/{}",
            EDITION_2022
        )))
        .and(query_param("jornada_in", "10"))
        .and(query_param("fase", PHASE_2022))
        .respond_with(html(FIXTURES_PAGE_2022_R10))
        .mount(&origin)
        .await;

    origin
}

/// 基于指定源站地址构建路由
pub fn build_router(base_url: &str) -> Router {
    let base_url = Url::parse(base_url).unwrap();
    let config = ScraperConfig::new(
        base_url,
        "brasileirao-api-tests".to_string(),
        Duration::from_secs(5),
    );
    let engine = Arc::new(ReqwestEngine::new(&config).unwrap());
    let source = Arc::new(OgolSource::new(engine, config));
    let service = Arc::new(BrasileiraoService::new(source));

    routes::routes(service)
}

/// 基于指定源站地址构建完整应用
pub fn build_server(base_url: &str) -> TestServer {
    TestServer::new(build_router(base_url)).unwrap()
}

pub async fn create_test_app() -> TestApp {
    let origin = start_origin().await;
    let server = build_server(&origin.uri());
    TestApp { server, origin }
}
