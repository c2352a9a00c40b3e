use url::Url;

use crate::error::Error;
use crate::error::Result;

/// Endpoint and credential state for one calculation run.
///
/// Owned by exactly one run; never shared across concurrent calculations.
/// The bearer credential is the only mutable field, and it is only replaced
/// wholesale via [`Session::set_bearer`] after a refresh exchange. The
/// serialized payload is fixed for the session's lifetime: refreshing a
/// credential never changes what is being submitted.
#[derive(Clone, Debug)]
pub struct Session {
    submit_url: String,
    refresh_url: String,
    bearer_key: String,
    refresh_key: String,
    request_body: String,
}

impl Session {
    pub fn new(
        submit_url: impl Into<String>,
        refresh_url: impl Into<String>,
        bearer_key: impl Into<String>,
        refresh_key: impl Into<String>,
        request_body: impl Into<String>,
    ) -> Self {
        Self {
            submit_url: submit_url.into(),
            refresh_url: refresh_url.into(),
            bearer_key: bearer_key.into(),
            refresh_key: refresh_key.into(),
            request_body: request_body.into(),
        }
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    pub fn refresh_url(&self) -> &str {
        &self.refresh_url
    }

    pub fn bearer_key(&self) -> &str {
        &self.bearer_key
    }

    pub fn refresh_key(&self) -> &str {
        &self.refresh_key
    }

    pub fn request_body(&self) -> &str {
        &self.request_body
    }

    /// Replace the bearer credential. The prior value is discarded; no
    /// history is kept.
    pub fn set_bearer(&mut self, token: String) {
        self.bearer_key = token;
    }

    /// Absolute URL for a job location issued by the submit endpoint.
    ///
    /// The location from the redirect's `Location` header is a path; the
    /// scheme and authority come from the submit URL, so polling always
    /// targets the host that accepted the job.
    pub fn poll_url(&self, location: &str) -> Result<String> {
        let submit = Url::parse(&self.submit_url).map_err(|source| Error::InvalidSubmitUrl {
            url: self.submit_url.clone(),
            source,
        })?;
        let host = submit
            .host_str()
            .ok_or_else(|| Error::SubmitUrlMissingHost(self.submit_url.clone()))?;
        let authority = match submit.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(format!("{}://{authority}{location}", submit.scheme()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session(submit_url: &str) -> Session {
        Session::new(submit_url, "https://auth.example/refresh", "b", "r", "{}")
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn poll_url_joins_submit_host_and_location() {
        let s = session("https://api.example.com/calculations");
        assert_eq!(
            s.poll_url("/jobs/abc123").unwrap(),
            "https://api.example.com/jobs/abc123"
        );
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn poll_url_keeps_explicit_port() {
        let s = session("https://api.example.com:8443/calculations");
        assert_eq!(
            s.poll_url("/jobs/abc123").unwrap(),
            "https://api.example.com:8443/jobs/abc123"
        );
    }

    #[test]
    fn poll_url_rejects_unparseable_submit_url() {
        let s = session("not a url");
        assert!(matches!(
            s.poll_url("/jobs/x"),
            Err(Error::InvalidSubmitUrl { .. })
        ));
    }

    #[test]
    fn set_bearer_replaces_wholesale() {
        let mut s = session("https://api.example.com/calculations");
        s.set_bearer("fresh".to_string());
        assert_eq!(s.bearer_key(), "fresh");
        // The payload is untouched by a credential rotation.
        assert_eq!(s.request_body(), "{}");
    }
}
