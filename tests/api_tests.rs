//! WeatherClient against a mocked provider

use std::time::Duration;

use pretty_assertions::assert_eq;
use weather_lookup::api::{LookupError, ProviderConfig, WeatherClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const TEST_KEY: &str = "test-key-123";

fn client_for(server: &MockServer) -> WeatherClient {
    let config = ProviderConfig {
        base_url: server.uri(),
        api_key: Some(TEST_KEY.to_string()),
        timeout: Some(Duration::from_secs(5)),
    };
    WeatherClient::new(config).expect("client should build")
}

fn conditions_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 73.86, "lat": 18.52},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04n"}],
        "main": {"temp": 23.47, "feels_like": 23.9, "humidity": 78},
        "wind": {"speed": 2.57, "deg": 270},
        "name": "Pune",
        "cod": 200
    })
}

#[tokio::test]
async fn test_current_conditions_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Pune"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_response()))
        .expect(1)
        .mount(&server)
        .await;

    let observation = client_for(&server)
        .current_conditions("Pune")
        .await
        .expect("lookup should succeed");

    assert_eq!(observation.location, "Pune");
    assert_eq!(observation.icon_code, "04n");
    assert_eq!(observation.description, "broken clouds");
    assert_eq!(observation.humidity, 78);
    assert!((observation.temperature - 23.47).abs() < f64::EPSILON);
    assert!((observation.wind_speed - 2.57).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_city_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_response()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).current_conditions("São Paulo").await;

    assert!(result.is_ok(), "unexpected failure: {result:?}");
}

#[tokio::test]
async fn test_provider_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_conditions("Atlantis")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LookupError::Provider {
            status: 404,
            message: "city not found".into()
        }
    );
    assert_eq!(err.to_string(), "city not found");
}

#[tokio::test]
async fn test_non_json_error_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_conditions("Pune")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 502");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"name\": \"Pune\""))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_conditions("Pune")
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_response()))
        .expect(0)
        .mount(&server)
        .await;

    let config = ProviderConfig {
        base_url: server.uri(),
        api_key: None,
        timeout: None,
    };
    let client = WeatherClient::new(config).expect("client should build");

    let err = client.current_conditions("Pune").await.unwrap_err();

    assert_eq!(err, LookupError::MissingApiKey);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProviderConfig {
        base_url: format!("{}/", server.uri()),
        api_key: Some(TEST_KEY.to_string()),
        timeout: None,
    };
    let client = WeatherClient::new(config).expect("client should build");

    assert!(client.current_conditions("Pune").await.is_ok());
}

#[tokio::test]
async fn test_errors_never_contain_the_key() {
    // Nothing listens here, so the request fails in transport
    let config = ProviderConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: Some(TEST_KEY.to_string()),
        timeout: Some(Duration::from_secs(2)),
    };
    let client = WeatherClient::new(config).expect("client should build");

    let err = client.current_conditions("Pune").await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().contains(TEST_KEY));
    assert!(!format!("{:?}", client.config()).contains(TEST_KEY));
}
