use std::path::PathBuf;

use crtsh_core::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answer `GET /?q=<q>&output=json` with the given crt.sh records.
pub async fn mock_crtsh(server: &MockServer, q: &str, records: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", q))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

/// Answer a query with an arbitrary status and raw body.
pub async fn mock_crtsh_raw(server: &MockServer, q: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", q))
        .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer, output: PathBuf) -> Config {
    Config {
        endpoint: format!("{}/", server.uri()),
        output: Some(output),
        ..Config::default()
    }
}
