//! Blocking HTTP GET of a registry document.
//!
//! Uses the curl crate (libcurl). Runs in the current thread and returns the
//! whole body as text; registries are small enough to hold in memory.

use crate::error::IngestError;
use std::time::Duration;

/// Knobs for a single GET. Built from `PrefixmapsConfig::fetch_options`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Whole-request timeout, body included.
    pub timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::with_timeouts(15, 60)
    }
}

impl FetchOptions {
    pub fn with_timeouts(connect_secs: u64, total_secs: u64) -> Self {
        Self {
            connect_timeout: Duration::from_secs(connect_secs),
            timeout: Duration::from_secs(total_secs),
            max_redirections: 10,
            user_agent: concat!("prefixmaps/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn network(url: &str) -> impl Fn(curl::Error) -> IngestError + '_ {
    move |source| IngestError::Network {
        url: url.to_string(),
        source,
    }
}

/// GET `url` and return the body as UTF-8 text.
///
/// Follows redirects. Transport failures map to `IngestError::Network`,
/// non-2xx responses to `IngestError::HttpStatus`.
pub fn fetch_text(url: &str, opts: &FetchOptions) -> Result<String, IngestError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(network(url))?;
    easy.get(true).map_err(network(url))?;
    easy.follow_location(true).map_err(network(url))?;
    easy.max_redirections(opts.max_redirections)
        .map_err(network(url))?;
    easy.useragent(&opts.user_agent).map_err(network(url))?;
    easy.connect_timeout(opts.connect_timeout)
        .map_err(network(url))?;
    easy.timeout(opts.timeout).map_err(network(url))?;

    tracing::debug!("GET {}", url);
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(network(url))?;
        transfer.perform().map_err(network(url))?;
    }

    let status = easy.response_code().map_err(network(url))?;
    if !(200..300).contains(&status) {
        tracing::warn!("GET {} returned HTTP {}", url, status);
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    tracing::info!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());

    String::from_utf8(body).map_err(|source| IngestError::Encoding {
        url: url.to_string(),
        source,
    })
}
