//! Integration tests for the endpoint bindings.
//!
//! Each test points a client at a `wiremock` server and checks the verb,
//! path, query and body of the request, then the typed or raw result.

use sensibo_api::api::CreateDeviceSchedulePayload;
use sensibo_api::models::ACStateData;
use sensibo_api::{ApiKey, BaseUrl, SensiboClient, SensiboConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "it-key";

/// Creates a client whose base URL points at the mock server.
fn client_for(server: &MockServer) -> SensiboClient {
    let config = SensiboConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .base_url(BaseUrl::new(format!("{}/api", server.uri())).unwrap())
        .build()
        .unwrap();
    SensiboClient::new(&config)
}

fn envelope(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": "success", "result": result}))
}

// ============================================================================
// Read Operations
// ============================================================================

#[tokio::test]
async fn test_get_all_devices() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/me/pods"))
        .and(query_param("apiKey", API_KEY))
        .and(query_param("fields", "id,room"))
        .and(header("Accept", "*/*"))
        .and(header("Content-Type", "application/json"))
        .respond_with(envelope(json!([
            {"id": "pod1", "room": {"uid": "r1", "name": "Office"}},
            {"id": "pod2", "room": {"uid": "r2", "name": "Bedroom"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client_for(&server)
        .get_all_devices(&["id", "room"])
        .await
        .unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].room_name(), Some("Office"));
    assert_eq!(devices[1].id.as_deref(), Some("pod2"));
}

#[tokio::test]
async fn test_get_device() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pods/pod1"))
        .and(query_param("fields", "*"))
        .respond_with(envelope(json!({
            "id": "pod1",
            "acState": {"on": true, "mode": "cool", "targetTemperature": 21},
            "connectionStatus": {"isAlive": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let device = client_for(&server).get_device("pod1", &["*"]).await.unwrap();

    assert!(device.is_on());
    assert!(device.is_alive());
    assert_eq!(device.target_temperature(), Some(21.0));
}

#[tokio::test]
async fn test_get_device_ac_states() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pods/pod1/acStates"))
        .and(query_param("limit", "10"))
        .respond_with(envelope(json!([
            {"id": "a", "status": "Success", "reason": "UserRequest", "acState": {"on": true}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let states = client_for(&server)
        .get_device_ac_states("pod1", 10)
        .await
        .unwrap();

    assert_eq!(states.len(), 1);
    assert_eq!(states[0].reason.as_deref(), Some("UserRequest"));
}

#[tokio::test]
async fn test_get_device_historical_measurements() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pods/pod1/historicalMeasurements"))
        .and(query_param("days", "2"))
        .respond_with(envelope(json!({
            "temperature": [{"time": "2024-01-01T00:00:00Z", "value": 19.5}],
            "humidity": [{"time": "2024-01-01T00:00:00Z", "value": 40}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = client_for(&server)
        .get_device_historical_measurements("pod1", 2)
        .await
        .unwrap();

    assert_eq!(history.temperature.len(), 1);
    assert_eq!(history.humidity.len(), 1);
}

#[tokio::test]
async fn test_get_device_historical_measurements_with_null_samples() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pods/pod1/historicalMeasurements"))
        .respond_with(envelope(json!({
            "temperature": [{"time": "2024-01-01T00:00:00Z", "value": null}],
            "humidity": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = client_for(&server)
        .get_device_historical_measurements("pod1", 1)
        .await
        .unwrap();

    assert_eq!(history.temperature.len(), 1);
    assert!(history.humidity.is_empty());
}

#[tokio::test]
async fn test_get_device_climate_react_settings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pods/pod1/smartmode"))
        .respond_with(envelope(json!({
            "enabled": true,
            "type": "temperature",
            "highTemperatureThreshold": 27,
            "highTemperatureState": {"on": true, "mode": "cool"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = client_for(&server)
        .get_device_climate_react_settings("pod1")
        .await
        .unwrap();

    assert!(settings.enabled);
    assert_eq!(settings.high_temperature_threshold, Some(27.0));
}

#[tokio::test]
async fn test_get_device_timer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/pods/pod1/timer"))
        .respond_with(envelope(json!({
            "id": "timer1",
            "isEnabled": true,
            "acState": {"on": false},
            "targetTimeSecondsFromNow": 900
        })))
        .expect(1)
        .mount(&server)
        .await;

    let timer = client_for(&server).get_device_timer("pod1").await.unwrap();

    assert!(timer.is_enabled);
    assert_eq!(timer.target_time_seconds_from_now, Some(900));
}

#[tokio::test]
async fn test_get_device_schedules_and_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/pods/pod1/schedules"))
        .respond_with(envelope(json!([{"id": "s1"}, {"id": "s2"}, {"id": "s3"}])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/pods/pod1/schedules/s2"))
        .respond_with(envelope(json!({"id": "s2", "recurringDays": ["Monday"]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let schedules = client.get_device_schedules("pod1").await.unwrap();
    let schedule = client.get_device_schedule("pod1", "s2").await.unwrap();

    assert_eq!(schedules.len(), 3);
    assert_eq!(schedule.recurring_days, vec!["Monday".to_string()]);
}

// ============================================================================
// Write Operations
// ============================================================================

#[tokio::test]
async fn test_set_device_ac_state_property() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/pods/pod1/acStates/mode"))
        .and(query_param("apiKey", API_KEY))
        .and(body_json(json!({"newValue": "dry"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .set_device_ac_state_property("pod1", "mode", "dry")
        .await
        .unwrap();

    assert_eq!(response, "Success");
}

#[tokio::test]
async fn test_set_device_ac_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/pods/pod1/acStates"))
        .and(body_json(json!({
            "acState": {
                "on": true,
                "mode": "heat",
                "fanLevel": "low",
                "targetTemperature": 25,
                "temperatureUnit": "C",
                "swing": "stopped"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let state = ACStateData {
        on: true,
        mode: Some("heat".to_string()),
        fan_level: Some("low".to_string()),
        target_temperature: Some(25.0),
        temperature_unit: Some("C".to_string()),
        swing: Some("stopped".to_string()),
    };

    let response = client_for(&server)
        .set_device_ac_state("pod1", &state)
        .await
        .unwrap();

    assert_eq!(response, r#"{"status":"success"}"#);
}

#[tokio::test]
async fn test_create_device_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/pods/pod1/schedules"))
        .and(body_json(json!({
            "targetTimeLocal": "06:45",
            "timezone": "Asia/Tbilisi",
            "acState": {"on": true, "mode": "heat"},
            "recurOnDaysOfWeek": ["Monday", "Tuesday"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Created"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = CreateDeviceSchedulePayload {
        target_time_local: "06:45".to_string(),
        time_zone: "Asia/Tbilisi".to_string(),
        ac_state: ACStateData {
            on: true,
            mode: Some("heat".to_string()),
            ..Default::default()
        },
        recurring_days: vec!["Monday".to_string(), "Tuesday".to_string()],
    };

    let response = client_for(&server)
        .create_device_schedule("pod1", &payload)
        .await
        .unwrap();

    assert_eq!(response, "Created");
}

#[tokio::test]
async fn test_set_device_timer() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/pods/pod1/timer"))
        .and(body_json(json!({"minutesFromNow": 45, "acState": {"on": false}})))
        .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
        .expect(1)
        .mount(&server)
        .await;

    let state = ACStateData {
        on: false,
        ..Default::default()
    };

    let response = client_for(&server)
        .set_device_timer("pod1", 45, &state)
        .await
        .unwrap();

    assert_eq!(response, "Success");
}

#[tokio::test]
async fn test_toggle_device_climate_react() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/pods/pod1/smartmode"))
        .and(body_json(json!({"enabled": false})))
        .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .toggle_device_climate_react("pod1", false)
        .await
        .unwrap();

    assert_eq!(response, "Success");
}

#[tokio::test]
async fn test_toggle_device_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/pods/pod1/schedules/s1"))
        .and(body_json(json!({"isEnabled": true})))
        .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .toggle_device_schedule("pod1", "s1", true)
        .await
        .unwrap();

    assert_eq!(response, "Success");
}

// ============================================================================
// Delete Operations
// ============================================================================

#[tokio::test]
async fn test_delete_device_timer() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/pods/pod1/timer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Deleted"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).delete_device_timer("pod1").await.unwrap();

    assert_eq!(response, "Deleted");
}

#[tokio::test]
async fn test_delete_device_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/pods/pod1/schedules/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Deleted"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .delete_device_schedule("pod1", "s1")
        .await
        .unwrap();

    assert_eq!(response, "Deleted");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_read_failure_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pods/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"reason":"NotFound"}"#))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_device("missing", &["id"])
        .await
        .unwrap_err();

    assert!(!error.is_decode());
    assert_eq!(error.status_code(), Some(404));
    assert_eq!(error.response_body(), Some(r#"{"reason":"NotFound"}"#));
    assert_eq!(
        error.to_string(),
        r#"failed getting device: failed making request: Code: 404, Msg: {"reason":"NotFound"}, Err: <none>"#
    );
}

#[tokio::test]
async fn test_read_with_unparseable_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/pods/pod1/timer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_device_timer("pod1")
        .await
        .unwrap_err();

    assert!(error.is_decode());
    assert!(error.status_code().is_none());
    assert_eq!(error.operation(), "getting timer");
}

#[tokio::test]
async fn test_write_failure_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/pods/pod1/timer"))
        .respond_with(ResponseTemplate::new(400).set_body_string("minutesFromNow must be positive"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .set_device_timer("pod1", 0, &ACStateData::default())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(400));
    assert_eq!(
        error.response_body(),
        Some("minutesFromNow must be positive")
    );
}
