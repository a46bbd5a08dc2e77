//! Webapp configuration loading.
//!
//! Each webapp ships a `<webapp>.cfg` file in INI format. A file only counts
//! as a real webapp configuration when it carries an `[info]` section with a
//! `logo` key; every other shape is reported as a [`ConfigError`] so callers
//! can tell a missing file from a broken one.

pub mod connection;
pub mod ini;

pub use connection::ConnectionSettings;
pub use ini::WebappConfig;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension of webapp configuration files.
pub const CONFIG_EXTENSION: &str = "cfg";

/// Form field naming the webapp whose configuration should be loaded.
pub const WEBAPP_FIELD: &str = "webapp";

/// Errors that can occur while loading a webapp configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The request form did not name a webapp.
    MissingWebapp,

    /// No configuration file exists at the given path.
    NotFound(PathBuf),

    /// The file exists but could not be read.
    Io(String),

    /// The file is not valid sectioned key/value text.
    Parse { line: usize, message: String },

    /// A required section is absent.
    MissingSection(String),

    /// A required key is absent from its section.
    MissingKey { section: String, key: String },

    /// A key is present but its value is unusable.
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

impl ConfigError {
    /// True when the file simply is not there (as opposed to being broken).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound(_) | ConfigError::MissingWebapp)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingWebapp => write!(f, "No webapp specified"),
            ConfigError::NotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::Io(msg) => write!(f, "Failed to read configuration: {}", msg),
            ConfigError::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            ConfigError::MissingSection(section) => {
                write!(f, "Missing section [{}]", section)
            }
            ConfigError::MissingKey { section, key } => {
                write!(f, "Missing key '{}' in section [{}]", key, section)
            }
            ConfigError::InvalidValue {
                section,
                key,
                message,
            } => write!(f, "Invalid value for '{}' in section [{}]: {}", key, section, message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

/// Loads the configuration named by the form's `webapp` field from the
/// current working directory.
///
/// # Examples
///
/// ```no_run
/// use cspace_client::config::get_config;
/// use std::collections::HashMap;
///
/// let mut form = HashMap::new();
/// form.insert("webapp".to_string(), "cluedo".to_string());
///
/// match get_config(&form) {
///     Ok(config) => println!("logo: {:?}", config.get("info", "logo")),
///     Err(e) => eprintln!("not a usable webapp: {}", e),
/// }
/// ```
pub fn get_config(form: &HashMap<String, String>) -> Result<WebappConfig, ConfigError> {
    get_config_in(Path::new("."), form)
}

/// Like [`get_config`], resolving `<webapp>.cfg` against `dir`.
///
/// # Arguments
///
/// * `dir` - Directory holding the webapp configuration files
/// * `form` - Request fields; only `webapp` is read
///
/// # Returns
///
/// The parsed configuration, or a [`ConfigError`] naming what was wrong.
pub fn get_config_in(
    dir: &Path,
    form: &HashMap<String, String>,
) -> Result<WebappConfig, ConfigError> {
    let webapp = form
        .get(WEBAPP_FIELD)
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .ok_or(ConfigError::MissingWebapp)?;

    load_config_from_dir(dir, webapp)
}

/// Boolean view of [`get_config`] for callers that only need to know
/// whether the named webapp has a usable configuration.
pub fn has_valid_config(form: &HashMap<String, String>) -> bool {
    get_config(form).is_ok()
}

/// Boolean view of [`get_config_in`].
pub fn has_valid_config_in(dir: &Path, form: &HashMap<String, String>) -> bool {
    get_config_in(dir, form).is_ok()
}

/// Loads and validates `<dir>/<webapp>.cfg`.
pub fn load_config_from_dir(dir: &Path, webapp: &str) -> Result<WebappConfig, ConfigError> {
    load_config(&config_path(dir, webapp))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config(path: &Path) -> Result<WebappConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let config = WebappConfig::parse(&content)?;
    validate(&config)?;

    log::debug!(
        "Loaded webapp configuration {} ({} sections)",
        path.display(),
        config.sections().count()
    );

    Ok(config)
}

/// Checks that the configuration looks like a webapp configuration.
pub fn validate(config: &WebappConfig) -> Result<(), ConfigError> {
    config.require("info", "logo").map(|_| ())
}

/// Path of the configuration file for `webapp` inside `dir`.
pub fn config_path(dir: &Path, webapp: &str) -> PathBuf {
    dir.join(format!("{}.{}", webapp, CONFIG_EXTENSION))
}
