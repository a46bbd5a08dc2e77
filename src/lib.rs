//! CollectionSpace scripting client
//!
//! Helpers for scripts and small webapps that talk to a CollectionSpace
//! services layer over its REST/XML API.
//!
//! # Architecture
//!
//! - **config**: loads `<webapp>.cfg` files and the `[connect]` settings in them
//! - **auth**: preemptive HTTP Basic credentials
//! - **models**: request descriptors and GET / POST results
//! - **executor**: the blocking, authenticated HTTP client
//! - **payload**: escaped XML payloads, such as record relations
//!
//! # Usage
//!
//! ```no_run
//! use cspace_client::config::{load_config_from_dir, ConnectionSettings};
//! use cspace_client::executor::ExecutionConfig;
//! use cspace_client::payload::RelationPayload;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_from_dir(Path::new("."), "cluedo")?;
//! let client = ConnectionSettings::from_config(&config)?.client(&ExecutionConfig::default())?;
//!
//! let listing = client.get("movements?pgSz=5")?;
//! println!("{} -> {}", listing.url, listing.status);
//!
//! let relation = RelationPayload::new("object-csid", "CollectionObject", "movement-csid", "Movement");
//! let created = client.post("relations", relation.to_xml())?;
//! println!("relation {} created in {:.3}s", created.csid, created.elapsed_secs());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod executor;
pub mod models;
pub mod payload;

pub use auth::Credentials;
pub use config::{get_config, ConfigError, ConnectionSettings, WebappConfig};
pub use executor::{make_get_request, post_xml, CspaceClient, ExecutionConfig, RequestError};
pub use models::{GetResponse, GetStatus, HttpMethod, PostResponse, RequestDescriptor};
pub use payload::{relations_payload, PayloadError, RelationPayload};
