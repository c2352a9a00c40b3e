use tracing::debug;

use crate::outcome::Outcome;
use crate::session::Session;
use crate::transport::Transport;

/// Start a calculation by POSTing the session's payload.
///
/// One HTTP call, no side effects beyond it. Resubmitting is not guaranteed
/// to be idempotent server-side; callers retry only through the
/// refresh orchestrator, which re-runs this exact request.
pub(crate) async fn submit(transport: &Transport, session: &Session) -> Outcome {
    debug!("submitting calculation to {}", session.submit_url());
    match transport
        .post_json(
            session.submit_url(),
            Some(session.bearer_key()),
            session.request_body(),
        )
        .await
    {
        Ok(res) => Outcome::from_submit_response(&res),
        Err(err) => Outcome::TransportError(format!("submit request failed: {err}")),
    }
}
