// src/core/uri.rs
//
// Link resolution against a document base href.
// Only root-relative links ("/path") are supported; anything else is an error
// the caller must treat as fatal.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("could not normalize uri `{uri}` against `{base}`: only root-relative uris are supported")]
    Unsupported { base: String, uri: String },

    #[error("base href `{0}` is not an absolute url with a host")]
    InvalidBase(String),
}

/// Resolve `uri` into `scheme://host<uri>` of `base_href`.
pub fn resolve(base_href: &str, uri: &str) -> Result<String, NormalizeError> {
    // "//cdn.host/x" is protocol-relative, not root-relative.
    if !uri.starts_with('/') || uri.starts_with("//") {
        return Err(NormalizeError::Unsupported { base: s!(base_href), uri: s!(uri) });
    }

    let base = Url::parse(base_href).map_err(|_| NormalizeError::InvalidBase(s!(base_href)))?;
    let host = base
        .host_str()
        .ok_or_else(|| NormalizeError::InvalidBase(s!(base_href)))?;

    Ok(format!("{}://{}{}", base.scheme(), host, uri))
}

/// Drop everything from the first `?` on.
pub fn strip_query(uri: &str) -> &str {
    match uri.find('?') {
        Some(i) => &uri[..i],
        None => uri,
    }
}
