use tracing::error;
use tracing::info;

use crate::orchestrator::RetryPolicy;
use crate::orchestrator::Work;
use crate::orchestrator::with_refresh;
use crate::outcome::Outcome;
use crate::session::Session;
use crate::transport::Transport;

/// Drive one calculation start to finish: submit the payload, then poll the
/// location the service hands back, refreshing the bearer credential as
/// needed in both phases.
///
/// Returns `Ok(Some(body))` with the raw result document on success, and
/// `Ok(None)` for every terminal failure the caller is expected to survive
/// (the reason has already been logged; downstream report generation should
/// be skipped). `Err` is reserved for the fatal conditions: refresh
/// exhaustion and a malformed refresh response.
pub async fn run_calculation(
    session: &mut Session,
    policy: &RetryPolicy,
) -> crate::Result<Option<String>> {
    let transport = Transport::new()?;

    let location = match with_refresh(&transport, session, policy, Work::Submit).await? {
        Outcome::Redirect(location) => {
            info!("calculation accepted; job location {location}");
            location
        }
        Outcome::BadRequest(body) => {
            error!("service rejected the payload: {body}");
            return Ok(None);
        }
        Outcome::TransportError(info) => {
            error!("submit failed: {info}");
            return Ok(None);
        }
        outcome @ (Outcome::Unauthorized
        | Outcome::Success(_)
        | Outcome::Accepted
        | Outcome::Gone
        | Outcome::Unprocessable) => {
            error!("submit produced an outcome outside its contract: {outcome:?}");
            return Ok(None);
        }
    };

    match with_refresh(&transport, session, policy, Work::Poll(&location)).await? {
        Outcome::Success(body) => {
            info!("calculation complete");
            Ok(Some(body))
        }
        Outcome::Gone => {
            error!("result expired or was already consumed; submit a fresh calculation to recover");
            Ok(None)
        }
        Outcome::Unprocessable => {
            error!("calculation failed server-side");
            Ok(None)
        }
        Outcome::TransportError(info) => {
            error!("poll failed: {info}");
            Ok(None)
        }
        outcome @ (Outcome::Unauthorized
        | Outcome::Redirect(_)
        | Outcome::BadRequest(_)
        | Outcome::Accepted) => {
            error!("poll produced an outcome outside its contract: {outcome:?}");
            Ok(None)
        }
    }
}
