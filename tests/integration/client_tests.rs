// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use brasileirao_api::client::{render_round, ApiClient, ClientError};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(Url::parse(&server.uri()).unwrap())
}

#[tokio::test]
async fn test_get_champion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/campeao/2022"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ano": "2022", "campeao": "Palmeiras"})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).get_champion("2022").await.unwrap();

    assert_eq!(result.year, "2022");
    assert_eq!(result.champion, "Palmeiras");
}

#[tokio::test]
async fn test_get_matches_renders_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jogos/2022/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ano": "2022",
            "rodada": "10",
            "jogos": [{
                "data": "2022-06-04",
                "mandante": {"nome": "Flamengo", "gols": 2},
                "visitante": {"nome": "Vasco", "gols": 1},
                "placar": "2-1"
            }]
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .get_matches("2022", "10")
        .await
        .unwrap();

    assert_eq!(result.matches.len(), 1);
    assert_eq!(
        render_round("2022", &result),
        "Jogos da rodada 10 do Brasileirão 2022:\n\n2022-06-04: Flamengo 2-1 Vasco"
    );
}

#[tokio::test]
async fn test_error_body_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/campeao/2030"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"erro": "Ainda não houve campeão para o Brasileirão 2030"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_champion("2030")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api(_)));
    assert_eq!(
        err.to_string(),
        "Ainda não houve campeão para o Brasileirão 2030"
    );
}

#[tokio::test]
async fn test_unreadable_error_body_is_unknown_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_matches("2022", "10")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::UnknownServer));
}
