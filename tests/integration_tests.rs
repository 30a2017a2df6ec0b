use festivo_rs::{FestivoClient, FestivoError, HolidayOptions};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

const LIST_PATH: &str = "/v3/public-holidays/list";
const CHECK_PATH: &str = "/v3/public-holidays/check";

fn client_for(server: &Server) -> FestivoClient {
    FestivoClient::new("test-key").with_base_url(server.url())
}

fn empty_list() -> String {
    json!({"holidays": [], "total": 0}).to_string()
}

#[tokio::test]
async fn test_get_holidays_returns_records_unchanged() {
    let mut server = Server::new_async().await;
    let body = json!({
        "holidays": [{"date": "2026-01-01", "name": "New Year's Day"}],
        "total": 1
    });
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Exact("country=US&year=2026".into()))
        .match_header("authorization", "Bearer test-key")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let response = client_for(&server)
        .get_holidays("US", 2026, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.len(), 1);
    assert_eq!(
        response.holidays()[0],
        json!({"date": "2026-01-01", "name": "New Year's Day"})
    );
    assert_eq!(response.total(), Some(1));

    let typed = response.typed().unwrap();
    assert_eq!(typed[0].name, "New Year's Day");
}

#[tokio::test]
async fn test_get_holidays_with_options() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Exact(
            "country=GB&year=2026&regions=GB-SCT&type=public&language=en&timezone=Europe%2FLondon"
                .into(),
        ))
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;

    let options = HolidayOptions::new()
        .with_regions("GB-SCT")
        .with_type("public")
        .with_language("en")
        .with_timezone("Europe/London");

    let response = client_for(&server)
        .get_holidays("GB", 2026, Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_options_cannot_override_country_or_year() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Exact("country=US&year=2026&foo=bar".into()))
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;

    let options = HolidayOptions::new()
        .with_param("country", "FR")
        .with_param("foo", "bar")
        .with_param("year", "1999");

    client_for(&server)
        .get_holidays("US", 2026, Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_city_holidays_forces_regions() {
    let mut server = Server::new_async().await;
    let plain = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Exact("country=IT&year=2026&regions=IT-MILAN".into()))
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;
    let with_options = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Exact(
            "country=IT&year=2026&regions=IT-MILAN&language=it".into(),
        ))
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .get_city_holidays("IT", "IT-MILAN", 2026, None)
        .await
        .unwrap();

    let options = HolidayOptions::new()
        .with_regions("IT-ROME")
        .with_language("it");
    client
        .get_city_holidays("IT", "IT-MILAN", 2026, Some(&options))
        .await
        .unwrap();

    plain.assert_async().await;
    with_options.assert_async().await;
    assert_eq!(options.regions(), Some("IT-ROME"));
}

#[tokio::test]
async fn test_get_regional_holidays_forces_regions() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Exact("country=GB&year=2026&regions=GB-SCT".into()))
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;

    let options = HolidayOptions::new().with_param("regions", "GB-WLS");
    client_for(&server)
        .get_regional_holidays("GB", "GB-SCT", 2026, Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_holiday_returns_raw_body() {
    let mut server = Server::new_async().await;
    let body = json!({
        "is_holiday": true,
        "holiday": {
            "date": "2026-12-25",
            "name": "Christmas Day",
            "type": "public",
            "public": true,
            "country": "US"
        }
    });
    let mock = server
        .mock("GET", CHECK_PATH)
        .match_query(Matcher::Exact("country=US&date=2026-12-25".into()))
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_body(body.to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .check_holiday("US", "2026-12-25", None)
        .await
        .unwrap();
    let result_empty_regions = client
        .check_holiday("US", "2026-12-25", Some(""))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.body(), &body);
    assert_eq!(result, result_empty_regions);
    assert_eq!(result.is_holiday(), Some(true));
    assert_eq!(result.holiday().unwrap().unwrap().name, "Christmas Day");
}

#[tokio::test]
async fn test_check_holiday_with_regions() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CHECK_PATH)
        .match_query(Matcher::Exact(
            "country=IT&date=2026-12-07&regions=IT-MILAN".into(),
        ))
        .with_status(200)
        .with_body(r#"{"is_holiday": true}"#)
        .create_async()
        .await;

    client_for(&server)
        .check_holiday("IT", "2026-12-07", Some("IT-MILAN"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_200_is_request_error_for_every_operation() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("<html>not json</html>")
        .create_async()
        .await;
    let _check = server
        .mock("GET", CHECK_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let results = vec![
        client.get_holidays("US", 2026, None).await.map(|_| ()),
        client
            .get_city_holidays("IT", "IT-MILAN", 2026, None)
            .await
            .map(|_| ()),
        client
            .get_regional_holidays("GB", "GB-SCT", 2026, None)
            .await
            .map(|_| ()),
        client
            .check_holiday("US", "2026-12-25", None)
            .await
            .map(|_| ()),
    ];

    for result in results {
        match result {
            Err(FestivoError::Request { status }) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED)
            }
            other => panic!("expected request error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_still_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(204)
        .create_async()
        .await;

    let err = client_for(&server)
        .get_holidays("US", 2026, None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NO_CONTENT));
    assert_eq!(err.error_code(), "REQUEST_ERROR");
}

#[tokio::test]
async fn test_missing_holidays_key_only_fails_list() {
    let mut server = Server::new_async().await;
    let body = r#"{"message": "ok"}"#;
    let _list = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let _check = server
        .mock("GET", CHECK_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_holidays("US", 2026, None).await.unwrap_err();
    assert!(matches!(err, FestivoError::Decode(_)), "{:?}", err);

    let result = client.check_holiday("US", "2026-12-25", None).await.unwrap();
    assert_eq!(result.body(), &json!({"message": "ok"}));
    assert_eq!(result.is_holiday(), None);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", CHECK_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{\"is_holiday\": tru")
        .create_async()
        .await;

    let err = client_for(&server)
        .check_holiday("US", "2026-12-25", None)
        .await
        .unwrap_err();
    assert!(matches!(err, FestivoError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn test_values_are_url_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "US".into()),
            Matcher::UrlEncoded("timezone".into(), "America/New York&x=1".into()),
        ]))
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;

    let options = HolidayOptions::new().with_timezone("America/New York&x=1");
    client_for(&server)
        .get_holidays("US", 2026, Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_api_key_omits_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(empty_list())
        .create_async()
        .await;

    FestivoClient::new("")
        .with_base_url(server.url())
        .get_holidays("US", 2026, None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CHECK_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"is_holiday": false}"#)
        .create_async()
        .await;

    let result = FestivoClient::new("test-key")
        .with_base_url(format!("{}/", server.url()))
        .check_holiday("US", "2026-03-03", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.is_holiday(), Some(false));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let err = FestivoClient::new("test-key")
        .with_base_url("http://127.0.0.1:1")
        .get_holidays("US", 2026, None)
        .await
        .unwrap_err();

    assert!(matches!(err, FestivoError::Transport(_)), "{:?}", err);
    assert_eq!(err.error_code(), "TRANSPORT_ERROR");
}

#[test]
fn test_from_env() {
    std::env::remove_var("FESTIVO_API_KEY");
    std::env::remove_var("FESTIVO_BASE_URL");
    let err = FestivoClient::from_env().unwrap_err();
    assert!(matches!(err, FestivoError::Config(_)));

    std::env::set_var("FESTIVO_API_KEY", "env-key");
    std::env::set_var("FESTIVO_BASE_URL", "http://localhost:9999");
    let client = FestivoClient::from_env().unwrap();
    assert!(client.has_api_key());
    assert_eq!(client.base_url(), "http://localhost:9999");

    std::env::remove_var("FESTIVO_API_KEY");
    std::env::remove_var("FESTIVO_BASE_URL");
}
