//! GET against a mock services layer.

use super::{
    client_for, credentials, silent_server, unreachable_server, AUTH_HEADER, PASSWORD, REALM,
    USERNAME,
};
use cspace_client::executor::{make_get_request, CspaceClient, ExecutionConfig};
use cspace_client::models::GetStatus;

const LIST_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?><ns2:abstract-common-list/>"#;

#[test]
fn test_get_success_returns_body_and_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/cspace-services/collectionobjects")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(LIST_BODY)
        .create();

    let response = client_for(&server).get("collectionobjects").unwrap();

    mock.assert();
    assert_eq!(
        response.url,
        format!("{}/cspace-services/collectionobjects", server.url())
    );
    assert_eq!(response.body.as_deref(), Some(LIST_BODY));
    assert_eq!(response.status, GetStatus::Code(200));
}

#[test]
fn test_get_not_found_is_not_an_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/cspace-services/collectionobjects/missing")
        .with_status(404)
        .with_body("not here")
        .create();

    let (url, body, status) = client_for(&server)
        .get("collectionobjects/missing")
        .unwrap()
        .into_parts();

    mock.assert();
    assert!(url.ends_with("/cspace-services/collectionobjects/missing"));
    assert_eq!(body, None);
    assert_eq!(status, GetStatus::Code(404));
}

#[test]
fn test_get_server_error_reports_code() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/cspace-services/movements")
        .with_status(500)
        .create();

    let response = client_for(&server).get("movements").unwrap();
    assert_eq!(response.body, None);
    assert_eq!(response.status.code(), Some(500));
}

#[test]
fn test_get_unauthorized_reports_code() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/cspace-services/movements")
        .match_header("authorization", "Basic d3Jvbmc6Y3JlZHM=")
        .with_status(200)
        .create();
    server
        .mock("GET", "/cspace-services/movements")
        .with_status(401)
        .create();

    let response = client_for(&server).get("movements").unwrap();
    assert_eq!(response.status, GetStatus::Code(401));
}

#[test]
fn test_get_unreachable_server_reports_reason() {
    let server = unreachable_server();
    let client = CspaceClient::new(server.clone(), credentials()).unwrap();

    let response = client.get("collectionobjects").unwrap();

    assert_eq!(
        response.url,
        format!("{}/cspace-services/collectionobjects", server)
    );
    assert_eq!(response.body, None);
    match response.status {
        GetStatus::Reason(reason) => assert!(!reason.is_empty()),
        other => panic!("Expected a failure reason, got {:?}", other),
    }
}

#[test]
fn test_make_get_request_one_shot() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/cspace-services/personauthorities")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body("<list/>")
        .create();

    let response =
        make_get_request(REALM, "personauthorities", &server.url(), USERNAME, PASSWORD).unwrap();

    mock.assert();
    assert_eq!(response.body.as_deref(), Some("<list/>"));
    assert_eq!(response.status, GetStatus::Code(200));
}

#[test]
fn test_get_with_invalid_server_is_an_error() {
    let result = make_get_request(REALM, "x", "not a server", USERNAME, PASSWORD);
    assert!(result.is_err());
}

#[test]
fn test_get_multiple_choices_has_no_body() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/cspace-services/movements")
        .with_status(300)
        .with_body("choices")
        .create();

    let response = client_for(&server).get("movements").unwrap();
    assert_eq!(response.body, None);
    assert_eq!(response.status, GetStatus::Code(300));
    assert!(!response.is_success());
}

#[test]
fn test_get_not_modified_has_no_body() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/cspace-services/movements/abc")
        .with_status(304)
        .create();

    let response = client_for(&server).get("movements/abc").unwrap();
    assert_eq!(response.body, None);
    assert_eq!(response.status, GetStatus::Code(304));
}

#[test]
fn test_get_timeout_reports_reason() {
    let (_listener, server) = silent_server();
    let client =
        CspaceClient::with_config(server, credentials(), &ExecutionConfig::with_timeout(1))
            .unwrap();

    let response = client.get("collectionobjects").unwrap();

    assert_eq!(response.body, None);
    assert_eq!(response.status, GetStatus::Reason("timed out".to_string()));
}

#[test]
fn test_get_body_is_decoded_with_reply_charset() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/cspace-services/placeauthorities")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=iso-8859-1")
        .with_body(b"caf\xe9".to_vec())
        .create();

    let response = client_for(&server).get("placeauthorities").unwrap();
    assert_eq!(response.body.as_deref(), Some("caf\u{e9}"));
}

#[test]
fn test_get_invalid_utf8_is_replaced() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/cspace-services/placeauthorities")
        .with_status(200)
        .with_body(b"ok\xff".to_vec())
        .create();

    let response = client_for(&server).get("placeauthorities").unwrap();
    assert_eq!(response.body.as_deref(), Some("ok\u{fffd}"));
}
