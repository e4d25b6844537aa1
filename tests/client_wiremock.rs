//! Client tests against wiremock.
//!
//! Checks what the generated client actually puts on the wire, independently
//! of the typed mock server.

use typed_mock::{ApiClient, Error, Get, GetQuery, Invoke, Post, PostBody, Request};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_sends_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sample"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "foo" }
            ])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(&mock_server.uri()).unwrap();
    let users = Invoke::<Get>::invoke(&api.sample(), Request::query(GetQuery { limit: 10 }))
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "foo");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sample"))
        .and(body_json(serde_json::json!({ "name": "foo" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 7, "name": "foo" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(&mock_server.uri()).unwrap();
    let response = api
        .sample()
        .fetch_post(&PostBody {
            name: "foo".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(response.body.id, 7);
}

#[tokio::test]
async fn test_prefix_path_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 5, "name": "eve" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(&format!("{}/api/", mock_server.uri())).unwrap();
    let found = Invoke::<Get>::invoke(&api.users().id(5), Request::default())
        .await
        .unwrap();

    assert_eq!(found.name, "eve");
}

#[tokio::test]
async fn test_error_message_is_extracted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sample"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "message": "name is taken" })),
        )
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(&mock_server.uri()).unwrap();
    let result = Invoke::<Post>::invoke(
        &api.sample(),
        Request::body(PostBody {
            name: "foo".to_string(),
        }),
    )
    .await;

    match result {
        Err(Error::ApiError {
            message,
            status_code,
        }) => {
            assert_eq!(message, "name is taken");
            assert_eq!(status_code, Some(422));
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mismatched_response_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sample"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("omg")))
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(&mock_server.uri()).unwrap();
    let result = Invoke::<Get>::invoke(&api.sample(), Request::default()).await;

    assert!(matches!(result, Err(Error::ParseError(_))));
}
