use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("result document is not valid LCIA result JSON")]
    Parse(#[source] serde_json::Error),

    #[error("could not write {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render the HTML report")]
    Render(#[source] askama::Error),
}
