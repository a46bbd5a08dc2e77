//! Shared helpers for the integration suites.

pub mod get_request_test;
pub mod post_request_test;

use cspace_client::auth::Credentials;
use cspace_client::executor::CspaceClient;
use std::net::TcpListener;

pub const REALM: &str = "org.collectionspace.services";
pub const USERNAME: &str = "user";
pub const PASSWORD: &str = "pass";

/// `Basic base64("user:pass")`
pub const AUTH_HEADER: &str = "Basic dXNlcjpwYXNz";

pub fn credentials() -> Credentials {
    Credentials::new(REALM, USERNAME, PASSWORD)
}

pub fn client_for(server: &mockito::ServerGuard) -> CspaceClient {
    CspaceClient::new(server.url(), credentials()).expect("mock server URL is valid")
}

/// A listener that accepts connections but never answers, and its base URL.
/// The connection stays open as long as the listener is alive.
pub fn silent_server() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    (listener, format!("http://127.0.0.1:{}", port))
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
