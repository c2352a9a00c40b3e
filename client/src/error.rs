use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions only. Protocol failures the caller is expected to
/// survive (bad request, expired result, transport faults) are reported as
/// [`crate::Outcome`] values, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The refresh endpoint answered with a success status but no `access`
    /// field. A contract violation with the service, not a transient fault.
    #[error("credential refresh succeeded but the response carried no `access` field")]
    MalformedRefreshResponse,

    /// The bearer credential was still rejected after the configured number
    /// of refresh-and-retry cycles.
    #[error("credential refresh attempts exhausted after {attempts} tries")]
    RefreshExhausted { attempts: u32 },

    #[error("invalid submit URL `{url}`")]
    InvalidSubmitUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("submit URL `{0}` has no host to poll against")]
    SubmitUrlMissingHost(String),

    #[error("failed to construct HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("could not read auth file {}", path.display())]
    AuthRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("auth file {} is not valid JSON", path.display())]
    AuthParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not write auth file {}", path.display())]
    AuthWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
