//! HTTP client behaviour against the mock API.

mod common;

use common::mock_api::{MockApi, MockResponse};
use common::client_for;
use mealbrowse::api::ApiError;

#[tokio::test]
async fn search_returns_meals_in_response_order() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::meals(&[
        ("52940", "Brown Stew Chicken"),
        ("52846", "Chicken & mushroom Hotpot"),
        ("52796", "Chicken Alfredo Primavera"),
    ]))
    .await;

    let meals = client_for(&mock.base_url()).search("chicken").await.unwrap();

    let ids: Vec<_> = meals.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["52940", "52846", "52796"]);
    assert_eq!(meals[0].category.as_deref(), Some("Chicken"));
}

#[tokio::test]
async fn search_sends_term_to_search_endpoint() {
    let mock = MockApi::start().await;
    client_for(&mock.base_url()).search("chicken").await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/json/v1/1/search.php");
    assert_eq!(requests[0].query.as_deref(), Some("s=chicken"));
}

#[tokio::test]
async fn null_meals_is_an_empty_list() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"meals": null}"#)).await;

    let meals = client_for(&mock.base_url()).search("zzz").await.unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn absent_meals_field_is_an_empty_list() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json("{}")).await;

    let meals = client_for(&mock.base_url()).search("zzz").await.unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn html_body_is_a_decode_error() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::html(200, "<html>maintenance</html>"))
        .await;

    let err = client_for(&mock.base_url()).search("chicken").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { endpoint: "search.php", .. }));
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::html(503, "unavailable")).await;

    let err = client_for(&mock.base_url()).search("chicken").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 503, .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let base_url = format!("http://{}/api/json/v1/1", addr);

    let err = client_for(&base_url).search("chicken").await.unwrap_err();
    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
async fn lookup_sends_identifier_and_takes_first_meal() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::meals(&[("52977", "Corba")])).await;

    let meal = client_for(&mock.base_url()).lookup("52977").await.unwrap();
    assert_eq!(meal.map(|m| m.name), Some("Corba".to_string()));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/json/v1/1/lookup.php");
    assert_eq!(requests[0].query.as_deref(), Some("i=52977"));
}

#[tokio::test]
async fn lookup_with_no_result_is_none() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"meals": []}"#)).await;

    let meal = client_for(&mock.base_url()).lookup("1").await.unwrap();
    assert!(meal.is_none());
}
