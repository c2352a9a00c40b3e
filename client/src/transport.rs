use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::LOCATION;

use crate::error::Error;
use crate::error::Result;

/// Per-request read timeout. A single exchange blocks up to this long; the
/// poll loop as a whole is bounded only by the service (or an explicit
/// deadline in [`crate::RetryPolicy`]).
pub const READ_TIMEOUT: Duration = Duration::from_secs(600);

/// One HTTPS exchange at a time, no retry or backoff at this layer.
///
/// Redirects are not followed: the submit endpoint's 3xx *is* the success
/// response and its `Location` header must stay observable. Certificate
/// verification is disabled; the configured endpoint is trusted implicitly.
/// That is a known weakening inherited from the service's deployment, not an
/// accident.
pub struct Transport {
    http: reqwest::Client,
}

/// Response fields the classifier cares about, captured eagerly so the
/// classification itself is a pure function of this value.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Transport {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(READ_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self { http })
    }

    /// POST a JSON body, optionally with a bearer credential.
    pub async fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &str,
    ) -> std::result::Result<RawResponse, reqwest::Error> {
        let mut req = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        if let Some(token) = bearer {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let res = req.send().await?;
        Ok(capture(res).await)
    }

    /// GET with a bearer credential.
    pub async fn get_json(
        &self,
        url: &str,
        bearer: &str,
    ) -> std::result::Result<RawResponse, reqwest::Error> {
        let res = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {bearer}"))
            .send()
            .await?;
        Ok(capture(res).await)
    }
}

async fn capture(res: reqwest::Response) -> RawResponse {
    let status = res.status();
    let location = res
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = res.text().await.unwrap_or_default();
    RawResponse {
        status,
        location,
        body,
    }
}
