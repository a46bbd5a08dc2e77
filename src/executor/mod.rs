//! Authenticated HTTP client for the CollectionSpace services layer.
//!
//! Each [`CspaceClient`] owns its own blocking HTTP session together with the
//! credentials it sends. Nothing is installed process-wide, so two clients
//! talking to different servers never see each other's configuration.
//!
//! Every call is one blocking round trip; there are no retries.
//!
//! - [`CspaceClient::get`] never fails for HTTP or connection errors: those are
//!   folded into the returned [`GetResponse`] as a status code or a reason.
//! - [`CspaceClient::post_xml`] returns every failure as a [`RequestError`].

pub mod config;
pub mod error;
pub mod location;

pub use config::ExecutionConfig;
pub use error::RequestError;
pub use location::extract_csid;

use crate::auth::Credentials;
use crate::models::{GetResponse, GetStatus, HttpMethod, PostResponse, RequestDescriptor};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use std::time::Instant;

/// Content type sent with every POST and PUT body.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Client bound to one services server and one account.
#[derive(Debug, Clone)]
pub struct CspaceClient {
    http: Client,
    server: String,
    credentials: Credentials,
}

impl CspaceClient {
    /// Creates a client with default execution settings.
    ///
    /// `server` is the base URL without the services path, e.g.
    /// `https://cs.example.org` or `http://localhost:8180`.
    pub fn new(server: impl Into<String>, credentials: Credentials) -> Result<Self, RequestError> {
        Self::with_config(server, credentials, &ExecutionConfig::default())
    }

    /// Creates a client with explicit execution settings.
    pub fn with_config(
        server: impl Into<String>,
        credentials: Credentials,
        config: &ExecutionConfig,
    ) -> Result<Self, RequestError> {
        let server = server.into();
        validate_url(&server)?;

        let http = Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| RequestError::BuildError(e.to_string()))?;

        Ok(Self {
            http,
            server,
            credentials,
        })
    }

    /// Base URL this client was created for.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Credentials sent with every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Fetches `<server>/cspace-services/<uri>`.
    ///
    /// Non-2xx replies and connection failures are logged and reported in
    /// the returned [`GetResponse`] with no body. Only failures that indicate
    /// a broken request (bad URL, unbuildable request) are errors.
    ///
    /// The body is decoded using the charset named in the reply's
    /// `Content-Type` (UTF-8 when absent). Undecodable bytes become U+FFFD.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cspace_client::auth::Credentials;
    /// use cspace_client::executor::CspaceClient;
    /// use cspace_client::models::GetStatus;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let creds = Credentials::new("org.collectionspace.services", "admin@core.collectionspace.org", "Administrator");
    /// let client = CspaceClient::new("http://localhost:8180", creds)?;
    ///
    /// let response = client.get("collectionobjects?pgSz=10")?;
    /// if let (Some(body), GetStatus::Code(200)) = (&response.body, &response.status) {
    ///     println!("{}", body);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, uri: &str) -> Result<GetResponse, RequestError> {
        let request = RequestDescriptor::new(HttpMethod::GET, &self.server, uri);
        validate_url(&request.url)?;

        log::debug!(
            "[{}] GET {} (realm {})",
            request.id,
            request.url,
            self.credentials.realm
        );

        let response = match self.build(&request).send() {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Err(e.into()),
            Err(e) => {
                let reason = failure_reason(&e);
                log::warn!("We failed to reach the server ({}).", self.server);
                log::warn!("Reason: {}", reason);
                return Ok(GetResponse {
                    url: request.url,
                    body: None,
                    status: GetStatus::Reason(reason),
                });
            }
        };

        // Redirects are followed by the client; any other non-2xx final reply is a failure
        let status = response.status();
        if !status.is_success() {
            log::warn!("The server ({}) couldn't fulfill the request.", self.server);
            log::warn!("Error code: {}", status.as_u16());
            return Ok(GetResponse {
                url: request.url,
                body: None,
                status: GetStatus::Code(status.as_u16()),
            });
        }

        match response.text() {
            Ok(body) => {
                log::debug!("[{}] {} ({} bytes)", request.id, status, body.len());
                Ok(GetResponse {
                    url: request.url,
                    body: Some(body),
                    status: GetStatus::Code(status.as_u16()),
                })
            }
            Err(e) => {
                let reason = failure_reason(&e);
                log::warn!("We failed to read the reply from ({}).", self.server);
                log::warn!("Reason: {}", reason);
                Ok(GetResponse {
                    url: request.url,
                    body: None,
                    status: GetStatus::Reason(reason),
                })
            }
        }
    }

    /// Sends an XML payload to `<server>/cspace-services/<uri>`.
    ///
    /// `request_type` selects the method: `"PUT"` sends a PUT, anything else
    /// a POST. When the reply carries a `Location` header the new record's
    /// CSID is taken from it; otherwise the CSID is empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cspace_client::auth::Credentials;
    /// use cspace_client::executor::CspaceClient;
    /// use cspace_client::payload::RelationPayload;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let creds = Credentials::new("org.collectionspace.services", "admin@core.collectionspace.org", "Administrator");
    /// let client = CspaceClient::new("http://localhost:8180", creds)?;
    ///
    /// let payload = RelationPayload::new("obj-csid", "CollectionObject", "subj-csid", "Movement");
    /// let created = client.post_xml("POST", "relations", payload.to_xml())?;
    /// println!("new relation {} in {:.3}s", created.csid, created.elapsed_secs());
    /// # Ok(())
    /// # }
    /// ```
    pub fn post_xml(
        &self,
        request_type: &str,
        uri: &str,
        payload: impl Into<Vec<u8>>,
    ) -> Result<PostResponse, RequestError> {
        let method = HttpMethod::for_write(request_type);
        let request = RequestDescriptor::new(method, &self.server, uri).with_payload(payload);
        validate_url(&request.url)?;

        let started = Instant::now();
        log::debug!(
            "[{}] {} {} (realm {})",
            request.id,
            request.method,
            request.url,
            self.credentials.realm
        );

        let result = self.send_xml(&request);
        if let Err(e) = &result {
            report_write_failure(&request, e);
        }
        let (status_code, location, body) = result?;

        let csid = match location {
            Some(location) => extract_csid(&request.uri, &location).ok_or_else(|| {
                let err = RequestError::ProtocolError(format!(
                    "Location header '{}' does not reference '{}'",
                    location, request.uri
                ));
                report_write_failure(&request, &err);
                err
            })?,
            None => String::new(),
        };

        let elapsed = started.elapsed();
        log::debug!(
            "[{}] {} -> csid '{}' in {:.3}s",
            request.id,
            status_code,
            csid,
            elapsed.as_secs_f64()
        );

        Ok(PostResponse {
            url: request.url,
            body,
            csid,
            status_code,
            elapsed,
        })
    }

    /// Shorthand for `post_xml("POST", ..)`.
    pub fn post(&self, uri: &str, payload: impl Into<Vec<u8>>) -> Result<PostResponse, RequestError> {
        self.post_xml(HttpMethod::POST.as_str(), uri, payload)
    }

    /// Shorthand for `post_xml("PUT", ..)`.
    pub fn put(&self, uri: &str, payload: impl Into<Vec<u8>>) -> Result<PostResponse, RequestError> {
        self.post_xml(HttpMethod::PUT.as_str(), uri, payload)
    }

    /// Sends the request and returns `(status, location, body)` for a success reply.
    fn send_xml(
        &self,
        request: &RequestDescriptor,
    ) -> Result<(u16, Option<String>, String), RequestError> {
        let mut builder = self
            .build(request)
            .header(CONTENT_TYPE, XML_CONTENT_TYPE);
        if let Some(payload) = &request.payload {
            builder = builder.body(payload.clone());
        }

        let response = builder.send()?;
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let body = response.text()?;

        if !status.is_success() {
            return Err(RequestError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        Ok((status.as_u16(), location, body))
    }

    fn build(&self, request: &RequestDescriptor) -> RequestBuilder {
        self.http
            .request(request.method.to_reqwest(), &request.url)
            .header(AUTHORIZATION, self.credentials.authorization_header())
    }
}

/// One-shot GET with a freshly built client.
///
/// # Arguments
///
/// * `realm` - Authentication realm, carried for logging only
/// * `uri` - Service-relative URI, e.g. `"collectionobjects?pgSz=10"`
/// * `server` - Base URL of the services server
/// * `username` - Account name sent in the Basic header
/// * `password` - Account password sent in the Basic header
///
/// # Returns
///
/// The same [`GetResponse`] as [`CspaceClient::get`]. `Err` only when the
/// server URL is unusable or the client cannot be built.
///
/// # Examples
///
/// ```no_run
/// use cspace_client::executor::make_get_request;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = make_get_request(
///     "org.collectionspace.services",
///     "movements",
///     "http://localhost:8180",
///     "admin@core.collectionspace.org",
///     "Administrator",
/// )?;
/// println!("{} -> {}", response.url, response.status);
/// # Ok(())
/// # }
/// ```
pub fn make_get_request(
    realm: &str,
    uri: &str,
    server: &str,
    username: &str,
    password: &str,
) -> Result<GetResponse, RequestError> {
    let credentials = Credentials::new(realm, username, password);
    CspaceClient::new(server, credentials)?.get(uri)
}

/// One-shot POST or PUT of an XML payload with a freshly built client.
///
/// `request_type` of exactly `"PUT"` sends a PUT; anything else sends a POST.
pub fn post_xml(
    request_type: &str,
    uri: &str,
    realm: &str,
    server: &str,
    username: &str,
    password: &str,
    payload: impl Into<Vec<u8>>,
) -> Result<PostResponse, RequestError> {
    let credentials = Credentials::new(realm, username, password);
    CspaceClient::new(server, credentials)?.post_xml(request_type, uri, payload)
}

fn report_write_failure(request: &RequestDescriptor, err: &RequestError) {
    if err.is_network() {
        log::error!("We failed to reach a server.");
        log::error!("Reason: {}", err);
    }
    if let Some(code) = err.status_code() {
        log::error!("The server couldn't fulfill the request.");
        log::error!("Error code: {}", code);
    }
    log::error!("Error in {}ing! [{}] {}", request.method, request.id, err);
    log::error!("{}", request.url);
    log::error!("{}", request.payload_text());
}

/// Short, human-readable reason for a transport failure.
fn failure_reason(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "timed out".to_string();
    }
    // The innermost source usually names the actual cause (e.g. "Connection refused")
    let mut source: &dyn std::error::Error = err;
    while let Some(next) = source.source() {
        source = next;
    }
    source.to_string()
}

/// Validates that the URL is well-formed and uses HTTP or HTTPS.
fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(())
}
