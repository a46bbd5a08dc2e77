//! Basic HTTP authentication implementation.
//!
//! Credentials are always sent preemptively: the header is built up front
//! instead of waiting for a `401` challenge from the services layer.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes username and password into a Basic authentication header value.
///
/// # Examples
///
/// ```
/// use cspace_client::auth::basic::basic_auth;
///
/// let auth_header = basic_auth("admin@core.collectionspace.org", "Administrator");
/// assert!(auth_header.starts_with("Basic "));
/// assert_eq!(basic_auth("user", "pass123"), "Basic dXNlcjpwYXNzMTIz");
/// ```
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    let encoded = STANDARD.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}

/// Decodes a Basic authentication header value back into `(username, password)`.
///
/// Returns `None` if the value is not a well-formed Basic header.
pub fn parse_basic_auth_header(header: &str) -> Option<(String, String)> {
    let encoded = header.trim().strip_prefix("Basic ")?.trim();

    let decoded_bytes = STANDARD.decode(encoded).ok()?;
    let decoded_str = String::from_utf8(decoded_bytes).ok()?;

    // Passwords may contain colons, usernames may not
    let (username, password) = decoded_str.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
