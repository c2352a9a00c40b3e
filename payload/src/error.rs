use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a valid input file", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("conditioned floor area must be positive, got {0}")]
    NonPositiveFloorArea(f64),

    #[error("study period must cover at least one year")]
    ZeroStudyPeriod,

    #[error("lighting technology fractions must sum to 1.0, got {0}")]
    UnbalancedLightingFractions(f64),

    #[error("annual {fuel} use for {end_use} is negative: {amount}")]
    NegativeEnergyUse {
        fuel: String,
        end_use: String,
        amount: f64,
    },

    #[error("failed to serialize the submission payload")]
    Serialize(#[source] serde_json::Error),
}
