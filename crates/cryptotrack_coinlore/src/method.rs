use serde::de::DeserializeOwned;

/// A Coinlore endpoint: its sub-path relative to the upstream base and the
/// shape its body decodes into.
pub trait Method {
    const PATH: &'static str;

    type Response: DeserializeOwned;
}
