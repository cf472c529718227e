//! Integration tests for the reqwest adapter against real HTTP responses
//!
//! UNIT UNDER TEST: ReqwestAdapter classification of live reqwest::Error values
//!
//! BUSINESS RESPONSIBILITY:
//!   - Map response status codes through the shared status table
//!   - Surface client-side timeouts as the timeout verb
//!   - Surface connection failures as network errors
//!   - Contribute status/url metadata to the log call
//!
//! TEST COVERAGE:
//!   - 401 / 404 / 500 / 429 responses served by wiremock
//!   - Connection refused without any server
//!   - Request timeout against a delayed response

#![cfg(feature = "reqwest")]

mod common;

use std::time::Duration;

use common::memory_handler;
use uniform_error::{ErrorVerb, ReqwestAdapter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Perform a GET against the mock server and turn the non-success
/// response into a `reqwest::Error`.
async fn status_error(server: &MockServer, route: &str) -> reqwest::Error {
    reqwest::get(format!("{}{}", server.uri(), route))
        .await
        .expect("request reaches the mock server")
        .error_for_status()
        .expect_err("mock responds with a non-success status")
}

#[tokio::test]
async fn test_status_responses_classify_through_the_table() {
    // Arrange
    let server = MockServer::start().await;
    let routes = [
        ("/missing", 404, ErrorVerb::NotFound),
        ("/session", 401, ErrorVerb::Unauthorized),
        ("/exploded", 500, ErrorVerb::ServerError),
        ("/throttled", 429, ErrorVerb::TooManyRequests),
    ];
    for (route, status, _) in routes {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
    }

    let (mut handler, _logger) = memory_handler();
    handler.register_adapter(ReqwestAdapter);

    // Act & Assert
    for (route, status, expected) in routes {
        let error = status_error(&server, route).await;
        let report = handler.handle(error).await;
        assert_eq!(
            report.verb, expected,
            "Status {status} from {route} must classify as {expected:?}"
        );
    }
}

#[tokio::test]
async fn test_status_metadata_reaches_the_logger() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (mut handler, logger) = memory_handler();
    handler.register_adapter(ReqwestAdapter).set_log_all_errors(true);

    // Act
    let error = status_error(&server, "/missing").await;
    handler.handle(error).await;

    // Assert
    let calls = logger.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].metadata["status"], 404);
    assert_eq!(
        calls[0].metadata["url"],
        format!("{}/missing", server.uri()),
        "The failing URL is carried into metadata"
    );
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Arrange: nothing is listening on the discard port
    let (mut handler, _logger) = memory_handler();
    handler.register_adapter(ReqwestAdapter);

    // Act
    let error = reqwest::get("http://127.0.0.1:9/unreachable")
        .await
        .expect_err("connection must be refused");
    let report = handler.handle(error).await;

    // Assert
    assert_eq!(report.verb, ErrorVerb::NetworkError);
}

#[tokio::test]
async fn test_slow_response_classifies_as_timeout() {
    // Arrange: server delays past the client timeout
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .expect("client builds");

    let (mut handler, _logger) = memory_handler();
    handler.register_adapter(ReqwestAdapter);

    // Act
    let error = client
        .get(format!("{}/slow", server.uri()))
        .send()
        .await
        .expect_err("request must time out");
    let report = handler.handle(error).await;

    // Assert
    assert_eq!(report.verb, ErrorVerb::Timeout);
}
