use std::time::Instant;

use tracing::info;

use crate::orchestrator::RetryPolicy;
use crate::outcome::Outcome;
use crate::session::Session;
use crate::transport::Transport;

/// Poll a job location until the service answers with a terminal status.
///
/// 202 is the only response that keeps the loop alive; everything else is
/// returned to the caller, including `Unauthorized` so the orchestrator can
/// refresh the credential and resume polling the *same* location. With no
/// deadline configured the loop is bounded only by the service's behavior.
pub(crate) async fn poll(
    transport: &Transport,
    session: &Session,
    location: &str,
    policy: &RetryPolicy,
) -> crate::Result<Outcome> {
    let url = session.poll_url(location)?;
    let started = Instant::now();
    loop {
        let outcome = match transport.get_json(&url, session.bearer_key()).await {
            Ok(res) => Outcome::from_poll_response(&res),
            Err(err) => Outcome::TransportError(format!("poll request failed: {err}")),
        };
        match outcome {
            Outcome::Accepted => {
                if let Some(deadline) = policy.deadline
                    && started.elapsed() >= deadline
                {
                    return Ok(Outcome::TransportError(format!(
                        "poll deadline of {deadline:?} exceeded while the job was still running"
                    )));
                }
                info!(
                    "calculation still running; polling again in {:?}",
                    policy.poll_interval
                );
                tokio::time::sleep(policy.poll_interval).await;
            }
            terminal => return Ok(terminal),
        }
    }
}
