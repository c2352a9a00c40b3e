use reqwest::StatusCode;

use crate::transport::RawResponse;

/// Classified result of one exchange with the calculation service.
///
/// A closed set, matched exhaustively at every consumption site so an
/// unanticipated status can never fall through into a success path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Submit accepted. The contained location is the path to poll.
    Redirect(String),
    /// Bearer credential rejected. The one recoverable failure: refreshing
    /// the credential and retrying the same work may succeed.
    Unauthorized,
    /// The service rejected the payload itself. Caller error, not retryable.
    BadRequest(String),
    /// Poll complete; carries the result document verbatim.
    Success(String),
    /// Job still running. The only non-terminal poll outcome.
    Accepted,
    /// Result expired or already consumed server-side. Only a fresh
    /// submission recovers from this.
    Gone,
    /// Calculation failed server-side. Not retryable.
    Unprocessable,
    /// Anything outside the service contract, connection faults included.
    TransportError(String),
}

impl Outcome {
    /// Classify a submit response. The success path is a redirect carrying
    /// the poll location; a plain 2xx is *not* part of the contract and is
    /// treated as a transport-level surprise.
    pub fn from_submit_response(res: &RawResponse) -> Self {
        if res.status.is_redirection() {
            return match &res.location {
                Some(location) => Outcome::Redirect(location.clone()),
                None => Outcome::TransportError(format!(
                    "submit redirected with status {} but no Location header",
                    res.status
                )),
            };
        }
        match res.status {
            StatusCode::UNAUTHORIZED => Outcome::Unauthorized,
            StatusCode::BAD_REQUEST => Outcome::BadRequest(res.body.clone()),
            status => Outcome::TransportError(format!(
                "unexpected submit status {status}; body: {}",
                res.body
            )),
        }
    }

    /// Classify a poll response.
    pub fn from_poll_response(res: &RawResponse) -> Self {
        match res.status {
            StatusCode::OK => Outcome::Success(res.body.clone()),
            StatusCode::ACCEPTED => Outcome::Accepted,
            StatusCode::GONE => Outcome::Gone,
            StatusCode::UNPROCESSABLE_ENTITY => Outcome::Unprocessable,
            StatusCode::UNAUTHORIZED => Outcome::Unauthorized,
            status => Outcome::TransportError(format!(
                "unexpected poll status {status}; body: {}",
                res.body
            )),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Outcome::Unauthorized)
    }
}
