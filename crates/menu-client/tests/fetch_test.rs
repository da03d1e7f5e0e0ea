//! Fetch behaviour against a local mock of the FamilyMenu endpoint.

use chrono::NaiveDate;
use menu_client::{DistrictConfig, FetchError, MenuClient};
use menu_data::DateRange;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const EXPECTED_ACCEPT: &str = "application/json, text/xml, application/xml;q=0.9, */*;q=0.8";

/// Compares the raw header value so the comma-separated list is matched whole.
fn accept_is_exact(req: &Request) -> bool {
    req.headers
        .get("accept")
        .and_then(|value| value.to_str().ok())
        == Some(EXPECTED_ACCEPT)
}

fn client_for(server: &MockServer) -> MenuClient {
    MenuClient::new(DistrictConfig {
        base_url: format!("{}/api/FamilyMenu", server.uri()),
        building_id: "building".to_string(),
        district_id: "district".to_string(),
        ..DistrictConfig::default()
    })
    .unwrap()
}

fn week_of_march_4() -> DateRange {
    DateRange::build(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), 5, false).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/FamilyMenu"))
        .and(query_param("buildingId", "building"))
        .and(query_param("districtId", "district"))
        .and(query_param("startDate", "3-4-2024"))
        .and(query_param("endDate", "3-8-2024"))
        .and(accept_is_exact)
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .fetch_range(&week_of_march_4())
        .await
        .unwrap();
    assert_eq!(body, r#"{"ok":true}"#);
}

#[tokio::test]
async fn test_fetch_returns_body_verbatim() {
    let server = MockServer::start().await;
    let xml = "<FamilyMenu>\n  <FamilyMenuSessions/>\n</FamilyMenu>\n";
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .fetch_range(&week_of_march_4())
        .await
        .unwrap();
    assert_eq!(body, xml);
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_range(&week_of_march_4())
        .await
        .unwrap_err();
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = MenuClient::new(DistrictConfig {
        base_url: "http://127.0.0.1:1/api/FamilyMenu".to_string(),
        ..DistrictConfig::default()
    })
    .unwrap();

    let err = client.fetch_range(&week_of_march_4()).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
