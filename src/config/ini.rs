//! Sectioned key/value (INI-style) parsing for webapp configuration files.
//!
//! The dialect is deliberately raw: no interpolation, no type coercion.
//!
//! ```text
//! [info]
//! logo = https://museum.example.org/logo.png
//! ; comment
//! schemacolor1: #325083
//! description = first line
//!     continued line
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

use super::ConfigError;

/// Section whose keys are visible from every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?P<name>[^\]]+)\]").expect("section header pattern is valid"));

/// Parsed contents of a `<webapp>.cfg` file.
///
/// Section names are case-sensitive; keys are stored lowercased so lookups
/// are case-insensitive on the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebappConfig {
    sections: BTreeMap<String, HashMap<String, String>>,
    defaults: HashMap<String, String>,
}

impl WebappConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration text.
    ///
    /// # Examples
    ///
    /// ```
    /// use cspace_client::config::WebappConfig;
    ///
    /// let config = WebappConfig::parse("[info]\nLogo = cluedo.png\n").unwrap();
    /// assert_eq!(config.get("info", "logo"), Some("cluedo.png"));
    /// ```
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = WebappConfig::new();
        let mut current_section: Option<String> = None;
        let mut last_key: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            // Indented lines continue the previous value
            if raw_line.starts_with(|c: char| c.is_whitespace()) {
                if let (Some(section), Some(key)) = (&current_section, &last_key) {
                    if let Some(value) = config.section_mut(section).get_mut(key) {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(trimmed);
                        continue;
                    }
                }
            }

            if let Some(captures) = SECTION_HEADER.captures(trimmed) {
                let name = captures["name"].trim().to_string();
                config.section_mut(&name);
                current_section = Some(name);
                last_key = None;
                continue;
            }

            let section = current_section.as_ref().ok_or_else(|| ConfigError::Parse {
                line: line_number,
                message: format!("key outside of any section: {}", trimmed),
            })?;

            let (key, value) = split_option(trimmed).ok_or_else(|| ConfigError::Parse {
                line: line_number,
                message: format!("expected 'key = value' or 'key: value', got: {}", trimmed),
            })?;

            if key.is_empty() {
                return Err(ConfigError::Parse {
                    line: line_number,
                    message: "empty key".to_string(),
                });
            }

            config
                .section_mut(section)
                .insert(key.clone(), value.to_string());
            last_key = Some(key);
        }

        Ok(config)
    }

    /// Looks up `key` in `section`, falling back to `[DEFAULT]`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = key.trim().to_lowercase();
        if section == DEFAULT_SECTION {
            return self.defaults.get(&key).map(String::as_str);
        }
        let values = self.sections.get(section)?;
        values
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    /// Like [`get`](Self::get), but reports which part was missing.
    pub fn require(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        if section != DEFAULT_SECTION && !self.has_section(section) {
            return Err(ConfigError::MissingSection(section.to_string()));
        }
        self.get(section, key).ok_or_else(|| ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Returns true if the section was declared (the `DEFAULT` section never counts).
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Declared section names in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// All keys visible from `section`, including inherited defaults.
    pub fn keys(&self, section: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .sections
            .get(section)
            .map(|values| values.keys().map(String::as_str).collect())
            .unwrap_or_default();
        for key in self.defaults.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys.sort_unstable();
        keys
    }

    fn section_mut(&mut self, name: &str) -> &mut HashMap<String, String> {
        if name == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(name.to_string()).or_default()
        }
    }
}

/// Splits an option line on the first `=` or `:`.
fn split_option(line: &str) -> Option<(String, &str)> {
    let pos = line.find(|c: char| c == '=' || c == ':')?;
    let key = line[..pos].trim().to_lowercase();
    let value = strip_inline_comment(line[pos + 1..].trim());
    Some((key, value))
}

/// Drops a trailing `; comment` from a value. Only the first `;` is
/// considered, and only when whitespace precedes it.
fn strip_inline_comment(value: &str) -> &str {
    match value.find(';') {
        Some(pos) if value[..pos].ends_with(char::is_whitespace) => value[..pos].trim_end(),
        _ => value,
    }
}
