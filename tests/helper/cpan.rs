//! CPAN stub server utilities

use mockito::{Mock, ServerGuard};
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

use cuppa::upstream::providers::CpanProvider;

pub const ARCHIVE_ROOT: &str = "http://cpan.test/CPAN/authors/id";

/// One release record as served by the CPAN distribution endpoint
pub fn release_record(dist: &str, version: &str, cpanid: &str, released: &str) -> Value {
    json!({
        "dist": dist,
        "archive": format!("{}-{}.tar.gz", dist, version),
        "cpanid": cpanid,
        "version": version,
        "released": released,
    })
}

/// Registers a `GET /api/dist/{name}` stub answering with `records`
pub async fn mock_dist(server: &mut ServerGuard, name: &str, records: Vec<Value>) -> Mock {
    server
        .mock("GET", format!("/api/dist/{}", name).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "releases": records }).to_string())
        .create_async()
        .await
}

/// Registers a `GET /api/dist/{name}` stub answering with a bare status
pub async fn mock_dist_status(
    server: &mut ServerGuard,
    name: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", format!("/api/dist/{}", name).as_str())
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

/// Provider pointed at the stub server
pub fn create_test_provider(server: &ServerGuard) -> CpanProvider {
    CpanProvider::new(
        Client::new(),
        Url::parse(&format!("{}/api/dist", server.url())).unwrap(),
        Url::parse(ARCHIVE_ROOT).unwrap(),
    )
    .unwrap()
}
