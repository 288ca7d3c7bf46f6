// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{build_server, create_test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_champion_found() {
    let app = create_test_app().await;

    let response = app.server.get("/campeao/2022").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"ano": "2022", "campeao": "Palmeiras"})
    );
}

#[tokio::test]
async fn test_champion_without_standings_is_not_found() {
    let app = create_test_app().await;

    let response = app.server.get("/campeao/2023").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"erro": "Ainda não houve campeão para o Brasileirão 2023"})
    );
}

#[tokio::test]
async fn test_champion_unknown_year_is_not_found() {
    let app = create_test_app().await;

    let response = app.server.get("/campeao/1950").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["erro"],
        "Ainda não houve campeão para o Brasileirão 1950"
    );
}

#[tokio::test]
async fn test_round_returns_matches_in_table_order() {
    let app = create_test_app().await;

    let response = app.server.get("/jogos/2022/10").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["ano"], "2022");
    assert_eq!(body["rodada"], "10");

    let jogos = body["jogos"].as_array().unwrap();
    assert_eq!(jogos.len(), 5);

    assert_eq!(
        jogos[0],
        json!({
            "data": "2022-06-04",
            "mandante": {"nome": "Flamengo", "gols": 2},
            "visitante": {"nome": "Vasco", "gols": 1},
            "placar": "2-1"
        })
    );

    // Dates carry forward from the last dated row
    assert_eq!(jogos[1]["data"], "2022-06-04");
    assert_eq!(jogos[1]["mandante"]["nome"], "Santos");
    assert_eq!(jogos[3]["data"], "2022-06-05");
    assert_eq!(jogos[3]["placar"], "1-1");

    let homes: Vec<&str> = jogos
        .iter()
        .map(|j| j["mandante"]["nome"].as_str().unwrap())
        .collect();
    assert_eq!(
        homes,
        vec!["Flamengo", "Santos", "Palmeiras", "Corinthians", "Grêmio"]
    );
}

#[tokio::test]
async fn test_round_without_fixtures_page_is_not_found() {
    let app = create_test_app().await;

    // No mock for round 11, so the origin answers 404
    let response = app.server.get("/jogos/2022/11").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"erro": "Não foram encontrados jogos para o ano 2022"})
    );
}

#[tokio::test]
async fn test_round_unknown_year_is_not_found() {
    let app = create_test_app().await;

    let response = app.server.get("/jogos/1999/1").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["erro"],
        "Não foram encontrados jogos para o ano 1999"
    );
}

#[tokio::test]
async fn test_origin_server_error_is_not_found() {
    let origin = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&origin)
        .await;
    let server = build_server(&origin.uri());

    let response = server.get("/jogos/2022/10").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["erro"],
        "Não foram encontrados jogos para o ano 2022"
    );
}

#[tokio::test]
async fn test_origin_unreachable_is_not_found() {
    let server = build_server("http://127.0.0.1:1");

    let response = server.get("/jogos/2022/10").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["erro"],
        "Não foram encontrados jogos para o ano 2022"
    );

    let response = server.get("/campeao/2022").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["erro"],
        "Ainda não houve campeão para o Brasileirão 2022"
    );
}

#[tokio::test]
async fn test_unusable_base_url_is_internal_error() {
    let server = build_server("mailto:scraper@example.com");

    let response = server.get("/campeao/2022").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.json::<Value>()["erro"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("Erro ao buscar dados"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app().await;

    let response = app.server.get("/jogos/2022").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

/// 版本端点测试
///
/// 直接以 `oneshot` 调用路由，不经过测试服务器
#[tokio::test]
async fn test_version_endpoint_oneshot() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    let origin = MockServer::start().await;
    let app = super::helpers::build_router(&origin.uri());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
