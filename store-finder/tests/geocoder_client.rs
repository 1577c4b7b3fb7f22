//! Integration tests for `GeocoderClient` using wiremock HTTP mocks.

use store_finder::catalog::StoreCatalog;
use store_finder::domain::StoreRecord;
use store_finder::geocode::{GeocodeError, Geocoder, GeocoderClient, GeocoderConfig};
use store_finder::search::{SearchError, find_stores};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeocoderClient {
    GeocoderClient::new(GeocoderConfig::new().with_base_url(base_url).with_timeout(5))
        .expect("client construction should not fail")
}

fn found(postcode: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "status": 200,
        "result": {
            "postcode": postcode,
            "quality": 1,
            "eastings": 518712,
            "northings": 169052,
            "country": "England",
            "longitude": longitude,
            "latitude": latitude,
            "admin_district": "Kingston upon Thames"
        }
    })
}

fn not_found() -> serde_json::Value {
    serde_json::json!({ "status": 404, "error": "Postcode not found" })
}

#[tokio::test]
async fn lookup_resolves_postcode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/postcodes/KT1%203PB"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(found("KT1 3PB", 51.40605, -0.281429)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let coordinate = client.lookup("KT1 3PB").await;

    assert!(coordinate.is_known());
    assert_eq!(coordinate.latitude(), 51.40605);
    assert_eq!(coordinate.longitude(), -0.281429);
}

#[tokio::test]
async fn unknown_postcode_is_unknown_coordinate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex("^/postcodes/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let coordinate = client.lookup("TW1 1DZ").await;
    assert!(coordinate.latitude().is_nan());
    assert!(coordinate.longitude().is_nan());

    match client.try_lookup("TW1 1DZ").await {
        Err(GeocodeError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Postcode not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn body_status_decides_even_on_http_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(not_found()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(!client.lookup("SW1A 1AA").await.is_known());
}

#[tokio::test]
async fn malformed_body_is_unknown_coordinate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    assert!(!client.lookup("KT1 3PB").await.is_known());
    assert!(matches!(
        client.try_lookup("KT1 3PB").await,
        Err(GeocodeError::Json {
            http_status: 502,
            ..
        })
    ));
}

#[tokio::test]
async fn null_coordinates_are_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": 200,
            "result": { "postcode": "GU19 5DG", "latitude": null, "longitude": null }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(matches!(
        client.try_lookup("GU19 5DG").await,
        Err(GeocodeError::MissingCoordinates)
    ));
}

#[tokio::test]
async fn blank_postcode_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(found("KT1 3PB", 51.4, -0.28)))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(!client.lookup("").await.is_known());
    assert!(!client.lookup("   ").await.is_known());
}

#[tokio::test]
async fn network_failure_is_unknown_coordinate() {
    // Nothing listens on the discard port.
    let client = test_client("http://127.0.0.1:9");

    assert!(!client.lookup("KT1 3PB").await.is_known());
    assert!(matches!(
        client.try_lookup("KT1 3PB").await,
        Err(GeocodeError::Http(_))
    ));
}

#[tokio::test]
async fn catalog_build_and_search_against_api() {
    let server = MockServer::start().await;

    for (encoded, postcode, latitude, longitude) in [
        ("KT1%203PB", "KT1 3PB", 51.40605, -0.281429),
        ("TW9%201YB", "TW9 1YB", 51.4613, -0.3037),
        ("KT3%204BD", "KT3 4BD", 51.4040, -0.2560),
        ("BN21%203NW", "BN21 3NW", 50.7684, 0.2903),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/postcodes/{encoded}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(found(postcode, latitude, longitude)),
            )
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/postcodes/GU19%205DG"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let catalog = StoreCatalog::build(
        vec![
            StoreRecord::new("Richmond", "TW9 1YB"),
            StoreRecord::new("Eastbourne", "BN21 3NW"),
            StoreRecord::new("Bagshot", "GU19 5DG"),
            StoreRecord::new("New Malden", "KT3 4BD"),
        ],
        &client,
    )
    .await;

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.unresolved(), 1);

    let nearby = catalog.find(&client, "KT1 3PB", 10.0).await.unwrap();
    let names: Vec<_> = nearby.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Richmond", "New Malden"]);

    let all = find_stores(&client, "KT1 3PB", 1000.0, catalog.stores())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.last().unwrap().name(), "Eastbourne");

    assert!(catalog.find(&client, "KT1 3PB", 0.0).await.unwrap().is_empty());

    assert!(matches!(
        catalog.find(&client, "GU19 5DG", 25.0).await,
        Err(SearchError::InvalidPostcode { .. })
    ));
}
