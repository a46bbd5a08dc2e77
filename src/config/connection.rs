//! Connection settings stored in a webapp's `[connect]` section.
//!
//! ```text
//! [connect]
//! realm    = org.collectionspace.services
//! protocol = https
//! hostname = cs.example.org
//! port     = 8180
//! tenant   = core
//! username = admin@core.collectionspace.org
//! password = Administrator
//! ```

use super::{ConfigError, WebappConfig};
use crate::auth::{Credentials, DEFAULT_REALM};
use crate::executor::{CspaceClient, ExecutionConfig, RequestError};

/// Section holding connection settings.
pub const CONNECT_SECTION: &str = "connect";

const DEFAULT_PROTOCOL: &str = "https";

/// Where and as whom to talk to the services layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub tenant: Option<String>,
    pub credentials: Credentials,
}

impl ConnectionSettings {
    /// Reads `[connect]` from a loaded webapp configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cspace_client::config::{ConnectionSettings, WebappConfig};
    ///
    /// let config = WebappConfig::parse(
    ///     "[connect]\nhostname = cs.example.org\nport = 8180\nprotocol = http\nusername = u\npassword = p\n",
    /// ).unwrap();
    /// let settings = ConnectionSettings::from_config(&config).unwrap();
    /// assert_eq!(settings.server(), "http://cs.example.org:8180");
    /// ```
    pub fn from_config(config: &WebappConfig) -> Result<Self, ConfigError> {
        let hostname = config.require(CONNECT_SECTION, "hostname")?.to_string();
        let username = config.require(CONNECT_SECTION, "username")?;
        let password = config.require(CONNECT_SECTION, "password")?;

        let optional = |key: &str| {
            config
                .get(CONNECT_SECTION, key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let port = match optional("port") {
            Some(port) => Some(port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                section: CONNECT_SECTION.to_string(),
                key: "port".to_string(),
                message: format!("'{}': {}", port, e),
            })?),
            None => None,
        };

        Ok(Self {
            protocol: optional("protocol").unwrap_or(DEFAULT_PROTOCOL).to_string(),
            hostname,
            port,
            tenant: optional("tenant").map(str::to_string),
            credentials: Credentials::new(
                optional("realm").unwrap_or(DEFAULT_REALM),
                username,
                password,
            ),
        })
    }

    /// Server base URL: `protocol://hostname[:port]`.
    pub fn server(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.protocol, self.hostname, port),
            None => format!("{}://{}", self.protocol, self.hostname),
        }
    }

    /// Builds a client for these settings.
    pub fn client(&self, config: &ExecutionConfig) -> Result<CspaceClient, RequestError> {
        CspaceClient::with_config(self.server(), self.credentials.clone(), config)
    }
}
