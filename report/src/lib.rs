//! Rendering of LCIA calculation results.
//!
//! The client hands the service's result document over as an opaque string;
//! this crate gives it a type and turns it into the two artifacts users
//! read: an HTML report and a per-impact CSV table.

mod error;
mod exporter;
mod result;

pub use error::ReportError;
pub use exporter::BuildingSummary;
pub use exporter::ReportExporter;
pub use result::ImpactScore;
pub use result::LciaResult;
pub use result::StageBreakdown;
