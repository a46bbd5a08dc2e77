//! Data models for calls to the services layer.

pub mod request;
pub mod response;

pub use request::{service_url, HttpMethod, RequestDescriptor, SERVICES_PATH};
pub use response::{GetResponse, GetStatus, PostResponse};
