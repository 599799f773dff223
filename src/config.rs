use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::model::error::ConfigError;

pub const CLIENT_INFO_HEADER: &str = "x-client-info";
pub const CLIENT_INFO: &str = concat!("storage-bucket-rs/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request unless the caller overrides them.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(CLIENT_INFO_HEADER),
        HeaderValue::from_static(CLIENT_INFO),
    );
    headers
}

/// Base URL and header set of a [`BucketClient`](crate::bucket::BucketClient).
/// Fixed at construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub url: String,
    pub headers: HeaderMap,
}

impl ClientConfig {
    /// Merges `headers` over [`default_headers`]; the caller's value wins on
    /// a name collision. The URL is used verbatim.
    pub fn new<I, K, V>(url: impl Into<String>, headers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut merged = default_headers();
        for (name, value) in headers {
            merged.insert(
                HeaderName::from_bytes(name.as_ref().as_bytes())?,
                HeaderValue::from_str(value.as_ref())?,
            );
        }

        Ok(Self {
            url: url.into(),
            headers: merged,
        })
    }
}
