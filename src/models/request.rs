//! Request data models.
//!
//! A [`RequestDescriptor`] captures everything needed to issue one call to
//! the services layer. Descriptors are built per call and dropped afterwards.

use serde::{Deserialize, Serialize};

/// Path prefix under which every CollectionSpace service is mounted.
pub const SERVICES_PATH: &str = "cspace-services";

/// HTTP methods used against the services layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// Read a record or list
    GET,
    /// Create a record; the new CSID comes back in `Location`
    POST,
    /// Replace an existing record
    PUT,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
        }
    }

    /// Maps a write request type to a method.
    ///
    /// Only the exact string `"PUT"` selects PUT; anything else, including an
    /// empty string, is a POST.
    ///
    /// # Examples
    ///
    /// ```
    /// use cspace_client::models::HttpMethod;
    ///
    /// assert_eq!(HttpMethod::for_write("PUT"), HttpMethod::PUT);
    /// assert_eq!(HttpMethod::for_write("POST"), HttpMethod::POST);
    /// assert_eq!(HttpMethod::for_write("put"), HttpMethod::POST);
    /// ```
    pub fn for_write(request_type: &str) -> Self {
        if request_type == "PUT" {
            HttpMethod::PUT
        } else {
            HttpMethod::POST
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One call to the services layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Unique identifier used to correlate log lines for this call.
    pub id: String,

    pub method: HttpMethod,

    /// Service-relative URI, e.g. `collectionobjects` or `relations`.
    pub uri: String,

    /// Fully resolved URL: `<server>/cspace-services/<uri>`.
    pub url: String,

    /// XML body for POST and PUT.
    pub payload: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Creates a descriptor for `uri` on `server` with no payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use cspace_client::models::{HttpMethod, RequestDescriptor};
    ///
    /// let request = RequestDescriptor::new(HttpMethod::GET, "https://cs.example.org", "personauthorities");
    /// assert_eq!(request.url, "https://cs.example.org/cspace-services/personauthorities");
    /// ```
    pub fn new(method: HttpMethod, server: &str, uri: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            uri: uri.to_string(),
            url: service_url(server, uri),
            payload: None,
        }
    }

    /// Attaches an XML payload.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Payload rendered as text for diagnostics.
    pub fn payload_text(&self) -> String {
        self.payload
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }
}

/// Builds `<server>/cspace-services/<uri>`.
pub fn service_url(server: &str, uri: &str) -> String {
    format!("{}/{}/{}", server, SERVICES_PATH, uri)
}
