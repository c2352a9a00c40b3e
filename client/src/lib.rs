//! Client for the remote life-cycle-impact-assessment (LCIA) calculation
//! service.
//!
//! One calculation is a strictly sequential exchange: submit the building
//! payload, follow the redirect to the job's poll location, poll until the
//! service reports a terminal status, refreshing the bearer credential on
//! 401s along the way. The result document is returned as an opaque string;
//! parsing it is the reporting layer's concern.

mod auth_store;
mod error;
mod orchestrator;
mod outcome;
mod poll;
mod refresh;
mod run;
mod session;
mod submit;
mod transport;

pub use auth_store::AuthDotJson;
pub use auth_store::try_read_auth_json;
pub use auth_store::write_auth_json;
pub use error::Error;
pub use error::Result;
pub use orchestrator::RetryPolicy;
pub use outcome::Outcome;
pub use run::run_calculation;
pub use session::Session;
pub use transport::RawResponse;
pub use transport::Transport;
