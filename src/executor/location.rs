//! Interpretation of the `Location` header returned on record creation.
//!
//! A successful POST answers with `Location: <server>/cspace-services/<uri>/<csid>`.
//! The CSID is whatever follows the first occurrence of `<uri>/`.

use regex::Regex;

/// Extracts the CSID from a `Location` header value.
///
/// The request URI is matched literally, so URIs containing regex
/// metacharacters (`?`, `.`) are safe. A trailing `/` on the URI is ignored.
///
/// # Arguments
///
/// * `uri` - Service-relative URI the record was created under
/// * `location` - Raw `Location` header value, relative or absolute
///
/// # Returns
///
/// Everything after the first `<uri>/`, or `None` if the header does not
/// contain it.
///
/// # Examples
///
/// ```
/// use cspace_client::executor::location::extract_csid;
///
/// let csid = extract_csid(
///     "collectionobjects",
///     "http://cs.example.org/cspace-services/collectionobjects/1a2b-3c4d",
/// );
/// assert_eq!(csid.as_deref(), Some("1a2b-3c4d"));
/// ```
pub fn extract_csid(uri: &str, location: &str) -> Option<String> {
    let uri = uri.trim_end_matches('/');
    let pattern = format!("{}/(.*)", regex::escape(uri));
    let re = Regex::new(&pattern).ok()?;
    re.captures(location)
        .and_then(|captures| captures.get(1))
        .map(|csid| csid.as_str().to_string())
}
