//! POST and PUT against a mock services layer.

use super::{
    client_for, credentials, silent_server, unreachable_server, AUTH_HEADER, PASSWORD, REALM,
    USERNAME,
};
use cspace_client::executor::{post_xml, CspaceClient, ExecutionConfig, RequestError};
use cspace_client::payload::RelationPayload;

const RECORD: &str = "<document name=\"collectionobjects\"/>";

#[test]
fn test_post_extracts_csid_from_location() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/cspace-services/foo")
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/xml")
        .match_body(RECORD)
        .with_status(201)
        .with_header("location", "foo/abc123")
        .create();

    let response = client_for(&server).post_xml("POST", "foo", RECORD).unwrap();

    mock.assert();
    assert_eq!(response.csid, "abc123");
    assert_eq!(response.status_code, 201);
    assert_eq!(response.url, format!("{}/cspace-services/foo", server.url()));
    assert!(response.elapsed_secs() >= 0.0);
}

#[test]
fn test_post_with_absolute_location() {
    let mut server = mockito::Server::new();
    let location = format!(
        "{}/cspace-services/collectionobjects/5e0c-11aa",
        server.url()
    );
    server
        .mock("POST", "/cspace-services/collectionobjects")
        .with_status(201)
        .with_header("location", &location)
        .create();

    let response = client_for(&server).post("collectionobjects", RECORD).unwrap();
    assert_eq!(response.csid, "5e0c-11aa");
}

#[test]
fn test_post_without_location_has_empty_csid() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/cspace-services/batch/run")
        .with_status(200)
        .with_body("<invocationResults/>")
        .create();

    let response = client_for(&server).post("batch/run", RECORD).unwrap();
    assert_eq!(response.csid, "");
    assert_eq!(response.body, "<invocationResults/>");
}

#[test]
fn test_put_uses_put_method() {
    let mut server = mockito::Server::new();
    let put = server
        .mock("PUT", "/cspace-services/collectionobjects/abc")
        .match_header("content-type", "application/xml")
        .with_status(200)
        .create();
    let post = server
        .mock("POST", "/cspace-services/collectionobjects/abc")
        .expect(0)
        .create();

    let response = client_for(&server)
        .post_xml("PUT", "collectionobjects/abc", RECORD)
        .unwrap();

    put.assert();
    post.assert();
    assert_eq!(response.csid, "");
}

#[test]
fn test_unknown_request_type_falls_back_to_post() {
    let mut server = mockito::Server::new();
    let post = server
        .mock("POST", "/cspace-services/media")
        .with_status(201)
        .create();

    client_for(&server).post_xml("put", "media", RECORD).unwrap();
    post.assert();
}

#[test]
fn test_post_server_error_is_http_status() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/cspace-services/relations")
        .with_status(500)
        .with_body("constraint violation")
        .create();

    let err = client_for(&server).post("relations", RECORD).unwrap_err();
    match err {
        RequestError::HttpStatus { code, body } => {
            assert_eq!(code, 500);
            assert_eq!(body, "constraint violation");
        }
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[test]
fn test_post_multiple_choices_is_http_status() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/cspace-services/relations")
        .with_status(300)
        .with_header("location", "relations/not-created")
        .with_body("choices")
        .create();

    let err = client_for(&server).post("relations", RECORD).unwrap_err();
    assert_eq!(err.status_code(), Some(300));
    assert!(matches!(err, RequestError::HttpStatus { ref body, .. } if body == "choices"));
}

#[test]
fn test_put_timeout_is_timeout_error() {
    let (_listener, server) = silent_server();
    let client =
        CspaceClient::with_config(server, credentials(), &ExecutionConfig::with_timeout(1))
            .unwrap();

    let err = client.put("collectionobjects/abc", RECORD).unwrap_err();
    assert!(matches!(err, RequestError::Timeout), "Expected timeout, got {:?}", err);
    assert!(err.is_network());
}

#[test]
fn test_post_location_outside_uri_is_protocol_error() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/cspace-services/relations")
        .with_status(201)
        .with_header("location", "http://elsewhere/other/1")
        .create();

    let err = client_for(&server).post("relations", RECORD).unwrap_err();
    assert!(err.is_protocol());
    assert!(matches!(err, RequestError::ProtocolError(_)));
}

#[test]
fn test_post_unreachable_server_is_network_error() {
    let client = CspaceClient::new(unreachable_server(), credentials()).unwrap();
    let err = client.post("relations", RECORD).unwrap_err();
    assert!(err.is_network(), "Expected network error, got {:?}", err);
}

#[test]
fn test_post_relation_payload_one_shot() {
    let payload = RelationPayload::new("A", "obj", "B", "subj").to_xml();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/cspace-services/relations")
        .match_header("authorization", AUTH_HEADER)
        .match_body(payload.as_str())
        .with_status(201)
        .with_header("location", "/cspace-services/relations/rel-1")
        .create();

    let response = post_xml(
        "POST",
        "relations",
        REALM,
        &server.url(),
        USERNAME,
        PASSWORD,
        payload,
    )
    .unwrap();

    mock.assert();
    let (_, _, csid, elapsed) = response.into_parts();
    assert_eq!(csid, "rel-1");
    assert!(elapsed >= 0.0);
}
