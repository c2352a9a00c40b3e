use serde::Deserialize;
use tracing::warn;

use crate::error::Error;
use crate::session::Session;
use crate::transport::Transport;

/// Result of one credential-refresh exchange.
pub(crate) enum RefreshOutcome {
    /// The service granted a new bearer credential.
    Rotated(String),
    /// The service did not grant one; the old credential stands. Recoverable
    /// in the sense that the orchestrator keeps counting attempts.
    Denied,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: Option<String>,
}

/// Exchange the long-lived refresh credential for a new bearer credential.
///
/// The refresh token travels only in the body; no `Authorization` header is
/// sent. A non-success response (or a connection fault) is a denial. A
/// success response that does not carry `access` is a contract violation
/// with the service and fatal: nothing downstream can run with a credential
/// the service claimed to have issued but didn't.
pub(crate) async fn refresh_bearer(
    transport: &Transport,
    session: &Session,
) -> crate::Result<RefreshOutcome> {
    let body = serde_json::json!({ "refresh": session.refresh_key() }).to_string();
    let res = match transport
        .post_json(session.refresh_url(), None, &body)
        .await
    {
        Ok(res) => res,
        Err(err) => {
            warn!("credential refresh request failed: {err}");
            return Ok(RefreshOutcome::Denied);
        }
    };
    if !res.status.is_success() {
        warn!(
            "credential refresh rejected with status {}; bearer left unchanged",
            res.status
        );
        return Ok(RefreshOutcome::Denied);
    }
    let parsed: RefreshResponse =
        serde_json::from_str(&res.body).map_err(|_| Error::MalformedRefreshResponse)?;
    match parsed.access {
        Some(token) => Ok(RefreshOutcome::Rotated(token)),
        None => Err(Error::MalformedRefreshResponse),
    }
}
