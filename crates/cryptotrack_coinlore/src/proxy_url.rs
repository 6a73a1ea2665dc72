use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::CoinloreConfig;

/// Characters left as-is when encoding a URI component. Everything else in the
/// UTF-8 form is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds proxy-wrapped request URLs: the proxy prefix followed by the
/// percent-encoded upstream URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    proxy_prefix: String,
}

impl UrlBuilder {
    pub fn new(config: &CoinloreConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            proxy_prefix: config.proxy_prefix.clone(),
        }
    }

    /// Unproxied upstream address for `sub_path`.
    pub fn upstream(&self, sub_path: &str) -> String {
        format!("{}{}", self.base_url, sub_path)
    }

    /// `sub_path` may carry its own query string; the whole upstream address is
    /// encoded as one opaque component.
    pub fn build(&self, sub_path: &str) -> String {
        let upstream = self.upstream(sub_path);
        format!(
            "{}{}",
            self.proxy_prefix,
            utf8_percent_encode(&upstream, URI_COMPONENT)
        )
    }
}
