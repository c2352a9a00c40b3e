use std::time::Duration;

use tracing::info;

use crate::error::Error;
use crate::outcome::Outcome;
use crate::poll::poll;
use crate::refresh::RefreshOutcome;
use crate::refresh::refresh_bearer;
use crate::session::Session;
use crate::submit::submit;
use crate::transport::Transport;

/// Timing and retry knobs for one calculation run, passed in at
/// construction so tests can inject millisecond intervals.
///
/// The interval doubles as the poll cadence and the wait between
/// refresh-and-retry cycles: both are "give the remote system time to
/// settle" waits.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Wait between poll attempts and between refresh-retry cycles.
    pub poll_interval: Duration,
    /// Ceiling on credential refreshes for a single unit of work.
    pub max_refresh_attempts: u32,
    /// Overall wall-clock bound on a poll loop. `None` polls until the
    /// service produces a terminal status.
    pub deadline: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_refresh_attempts: 5,
            deadline: None,
        }
    }
}

/// The two units of work the refresh orchestrator wraps. A poll retried
/// after a refresh reuses the location obtained by the original submit; it
/// never resubmits the job.
pub(crate) enum Work<'a> {
    Submit,
    Poll(&'a str),
}

async fn run_once(
    transport: &Transport,
    session: &Session,
    policy: &RetryPolicy,
    work: &Work<'_>,
) -> crate::Result<Outcome> {
    match work {
        Work::Submit => Ok(submit(transport, session).await),
        Work::Poll(location) => poll(transport, session, location, policy).await,
    }
}

/// Run `work`, refreshing the bearer credential and retrying while the
/// service rejects it, bounded by the policy's attempt ceiling.
///
/// Exhausting the ceiling is fatal: at that point the client holds a
/// credential the service has rejected `max_refresh_attempts + 1` times and
/// there is nothing left to degrade to.
pub(crate) async fn with_refresh(
    transport: &Transport,
    session: &mut Session,
    policy: &RetryPolicy,
    work: Work<'_>,
) -> crate::Result<Outcome> {
    let mut attempt: u32 = 0;
    loop {
        let outcome = run_once(transport, session, policy, &work).await?;
        if !outcome.is_unauthorized() {
            return Ok(outcome);
        }
        if attempt >= policy.max_refresh_attempts {
            return Err(Error::RefreshExhausted {
                attempts: policy.max_refresh_attempts,
            });
        }
        attempt += 1;
        info!(
            "bearer credential rejected; refreshing (attempt {attempt} of {})",
            policy.max_refresh_attempts
        );
        match refresh_bearer(transport, session).await? {
            RefreshOutcome::Rotated(token) => session.set_bearer(token),
            RefreshOutcome::Denied => {}
        }
        tokio::time::sleep(policy.poll_interval).await;
    }
}
