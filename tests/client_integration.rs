use hmda_api::types::{ActionTaken, Race};
use hmda_api::{Client, Error, HmdaQuery};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_aggregations_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("aggregations.json");

    Mock::given(method("GET"))
        .and(path("/aggregations"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2019, "dc").with_races(vec![Race::Black, Race::White]);
    let table = client.get_aggregations(&query).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0]["count"], json!(4912));
    assert_eq!(table.records[1]["races"], json!("White"));
    assert!(table.columns.iter().any(|c| c == "sum"));
}

#[tokio::test]
async fn get_institutions_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("institutions.json");

    Mock::given(method("GET"))
        .and(path("/filers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    // institutions has no categorical-filter requirement
    let query = HmdaQuery::new(2018, vec!["DC", "Md", "va"]);
    let table = client.get_institutions(&query).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0]["name"], json!("FIRST EXAMPLE BANK"));
}

#[tokio::test]
async fn get_loans_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("loans.csv");

    Mock::given(method("GET"))
        .and(path("/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2019, "dc")
        .with_actions(vec![ActionTaken::Incomplete, ActionTaken::PreapprovalApproved]);
    let table = client.get_loans(&query).await.unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.records[0]["loan_amount"], json!(255000));
    assert_eq!(table.records[0]["interest_rate"], json!(3.875));
    assert_eq!(table.records[1]["interest_rate"], serde_json::Value::Null);
    assert_eq!(table.records[2]["state_code"], json!("DC"));
}

#[tokio::test]
async fn filters_arrive_comma_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/csv"))
        .and(query_param("years", "2019"))
        .and(query_param("states", "dc"))
        .and(query_param("actions_taken", "5,8"))
        .and(query_param("races", "Black or African American,White"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("loans.csv")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2019, "dc")
        .with_actions(vec![ActionTaken::Incomplete, ActionTaken::PreapprovalApproved])
        .with_races(vec![Race::Black, Race::White]);
    assert!(client.get_loans(&query).await.is_ok());
}

#[tokio::test]
async fn get_aggregations_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/aggregations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2019, "dc").with_races(Race::Unavailable);
    match client.get_aggregations(&query).await {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_with_large_multibyte_body_is_returned_verbatim() {
    let mock_server = MockServer::start().await;
    let body = "€".repeat(700);

    Mock::given(method("GET"))
        .and(path("/aggregations"))
        .respond_with(ResponseTemplate::new(500).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2019, "dc").with_races(Race::Unavailable);
    match client.get_aggregations(&query).await {
        Err(Error::HttpStatus { status, body: got }) => {
            assert_eq!(status, 500);
            assert_eq!(got, body);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn get_aggregations_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/aggregations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2019, "dc").with_races(Race::Unavailable);
    assert!(client.get_aggregations(&query).await.is_err());
}

#[tokio::test]
async fn missing_categorical_filter_sends_no_request() {
    let mock_server = MockServer::start().await;

    // the mock proves no request reaches the wire
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2018, "dc");

    assert!(matches!(
        client.get_aggregations(&query).await,
        Err(Error::InsufficientFilter)
    ));
    assert!(matches!(
        client.get_loans(&query).await,
        Err(Error::InsufficientFilter)
    ));
}

#[tokio::test]
async fn invalid_state_fails_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = HmdaQuery::new(2018, "XY").with_races(Race::White);

    assert!(matches!(
        client.get_loans(&query).await,
        Err(Error::InvalidState { .. })
    ));
}
