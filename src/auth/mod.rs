//! HTTP authentication for the services layer.
//!
//! The CollectionSpace services use HTTP Basic authentication scoped to a
//! realm. The realm is carried for diagnostics; the header itself is always
//! sent preemptively, so no challenge/response round trip takes place.

pub mod basic;

use std::fmt;

/// Realm used by a stock CollectionSpace deployment.
pub const DEFAULT_REALM: &str = "org.collectionspace.services";

/// Basic-auth credentials for one services account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// HTTP Basic authentication realm.
    pub realm: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Creates credentials for the given realm and account.
    pub fn new(
        realm: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            realm: realm.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the `Authorization` header value for these credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use cspace_client::auth::Credentials;
    ///
    /// let creds = Credentials::new("org.collectionspace.services", "user", "pass");
    /// assert_eq!(creds.authorization_header(), "Basic dXNlcjpwYXNz");
    /// ```
    pub fn authorization_header(&self) -> String {
        basic::basic_auth(&self.username, &self.password)
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("realm", &self.realm)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
