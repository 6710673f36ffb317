//! Integration tests for the city catalog against a mock temperature
//! service.

use ambient_geo::{City, CityCatalog, CityTemperatureClient, TemperatureProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_catalog(base_url: &str, cities: Vec<City>) -> CityCatalog {
    let client = CityTemperatureClient::new(base_url).unwrap();
    CityCatalog::new(cities, TemperatureProvider::Http(client))
}

#[tokio::test]
async fn resolves_all_cities_in_catalog_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/temperature"))
        .and(query_param("city", "London"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"temperature": 14.5})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/temperature"))
        .and(query_param("city", "Paris"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"temperature": 17.0})),
        )
        .mount(&mock_server)
        .await;

    let catalog = http_catalog(
        &mock_server.uri(),
        vec![
            City::new("London", 51.5074, -0.1278),
            City::new("Paris", 48.8566, 2.3522),
        ],
    );

    let outcome = catalog.resolve_all().await;

    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.readings.len(), 2);
    assert_eq!(outcome.readings[0].city, "London");
    assert_eq!(outcome.readings[0].temperature, 14.5);
    assert_eq!(outcome.readings[1].city, "Paris");
    assert_eq!(outcome.readings[1].temperature, 17.0);
}

#[tokio::test]
async fn a_failed_city_is_dropped_without_sinking_the_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/temperature"))
        .and(query_param("city", "London"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"temperature": 14.5})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/temperature"))
        .and(query_param("city", "Paris"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let catalog = http_catalog(
        &mock_server.uri(),
        vec![
            City::new("London", 51.5074, -0.1278),
            City::new("Paris", 48.8566, 2.3522),
        ],
    );

    let outcome = catalog.resolve_all().await;

    assert_eq!(outcome.readings.len(), 1);
    assert_eq!(outcome.readings[0].city, "London");
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].contains("Paris"));
    assert!(!outcome.is_total_failure());
}

#[tokio::test]
async fn all_failures_mark_the_batch_as_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/temperature"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let catalog = http_catalog(
        &mock_server.uri(),
        vec![
            City::new("London", 51.5074, -0.1278),
            City::new("Paris", 48.8566, 2.3522),
        ],
    );

    let outcome = catalog.resolve_all().await;

    assert!(outcome.readings.is_empty());
    assert_eq!(outcome.failures.len(), 2);
    assert!(outcome.is_total_failure());
}

#[tokio::test]
async fn malformed_body_counts_as_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/temperature"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"temp\": \"warm\"}"))
        .mount(&mock_server)
        .await;

    let catalog = http_catalog(&mock_server.uri(), vec![City::new("London", 51.5074, -0.1278)]);

    let outcome = catalog.resolve_all().await;
    assert!(outcome.is_total_failure());
}
