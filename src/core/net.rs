// src/core/net.rs

// Blocking HTTP GET behind a small trait so the crawl can run against
// canned pages in tests.

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::options::NetOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request { url: String, #[source] source: reqwest::Error },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("unreadable body from {url}: {message}")]
    Body { url: String, message: String },
}

/// A downloaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched {
    /// Where the body actually came from, after redirects.
    pub url: String,
    pub body: String,
}

impl Fetched {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self { url: url.into(), body: body.into() }
    }
}

/// The only place the crawler touches the network.
pub trait Fetch {
    /// GET `url`, following redirects.
    fn get(&mut self, url: &str) -> Result<Fetched, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &NetOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&mut self, url: &str) -> Result<Fetched, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let final_url = s!(resp.url().as_str());
        if final_url != url {
            logd!(url, final_url = %final_url, "redirected");
        }

        let body = resp
            .text()
            .map_err(|e| FetchError::Body { url: s!(url), message: e.to_string() })?;
        Ok(Fetched { url: final_url, body })
    }
}
