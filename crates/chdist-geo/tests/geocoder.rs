//! Integration tests for `GeocoderClient` using wiremock HTTP mocks.

use chdist_geo::{GeocodeError, GeocoderClient};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeocoderClient {
    GeocoderClient::with_base_url(5, "chdist-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn resolve_returns_coordinate_for_known_postcode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/postcodes/SW1A(%20| )1AA$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "result": {
                "postcode": "SW1A 1AA",
                "latitude": 51.5007,
                "longitude": -0.1246,
                "country": "England"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let coord = client
        .resolve("SW1A 1AA")
        .await
        .expect("should resolve postcode");

    assert!((coord.latitude() - 51.5007).abs() < 1e-9);
    assert!((coord.longitude() - -0.1246).abs() < 1e-9);
}

#[tokio::test]
async fn resolve_surfaces_not_found_envelope_as_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/postcodes/ZZ99ZZ"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "error": "Postcode not found"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("ZZ99ZZ").await.unwrap_err();

    assert!(
        matches!(
            err,
            GeocodeError::Status { ref postcode, status: 404, ref message }
                if postcode == "ZZ99ZZ" && message == "Postcode not found"
        ),
        "expected Status error, got: {err:?}"
    );
}

#[tokio::test]
async fn resolve_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/postcodes/EH11YZ"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("EH11YZ").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::Deserialize { ref postcode, .. } if postcode == "EH11YZ"),
        "expected Deserialize error, got: {err:?}"
    );
}

#[tokio::test]
async fn resolve_blank_postcode_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("   ").await.unwrap_err();

    assert!(matches!(err, GeocodeError::EmptyPostcode));
}

#[tokio::test]
async fn resolve_reports_transport_failure_as_http_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = test_client(&format!("http://{addr}"));
    let err = client.resolve("SW1A1AA").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::Http { ref postcode, .. } if postcode == "SW1A1AA"),
        "expected Http error, got: {err:?}"
    );
}
