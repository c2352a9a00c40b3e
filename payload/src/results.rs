//! Annual simulation results: the measured half of the submission.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::PayloadError;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AnnualResults {
    /// Annual energy use by fuel and end use. PV generation is *not* listed
    /// here; it is reported separately and carried with a negative sign on
    /// the wire.
    pub energy: Vec<EnergyUse>,
    #[serde(default)]
    pub pv_generation_kwh: f64,
    pub water: WaterUse,
}

impl AnnualResults {
    pub fn from_file(path: &Path) -> Result<Self, PayloadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PayloadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| PayloadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct EnergyUse {
    pub fuel: Fuel,
    pub end_use: EndUse,
    pub annual_amount: f64,
    pub units: EnergyUnits,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Fuel {
    Electricity,
    NaturalGas,
    FuelOil,
    Propane,
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fuel::Electricity => "electricity",
            Fuel::NaturalGas => "natural gas",
            Fuel::FuelOil => "fuel oil",
            Fuel::Propane => "propane",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EndUse {
    Heating,
    Cooling,
    WaterHeating,
    Appliances,
    Lighting,
    PlugLoads,
}

impl fmt::Display for EndUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndUse::Heating => "heating",
            EndUse::Cooling => "cooling",
            EndUse::WaterHeating => "water heating",
            EndUse::Appliances => "appliances",
            EndUse::Lighting => "lighting",
            EndUse::PlugLoads => "plug loads",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnergyUnits {
    KilowattHours,
    Therms,
    Gallons,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WaterUse {
    pub indoor_gal: f64,
    #[serde(default)]
    pub outdoor_gal: f64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    #[expect(clippy::unwrap_used)]
    fn results_file_parses_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(
            &path,
            r#"{
                "energy": [
                    { "fuel": "electricity", "end_use": "cooling", "annual_amount": 1800.0, "units": "kilowatt_hours" }
                ],
                "water": { "indoor_gal": 42000.0 }
            }"#,
        )
        .unwrap();
        let results = AnnualResults::from_file(&path).unwrap();
        assert_eq!(results.energy.len(), 1);
        assert_eq!(results.pv_generation_kwh, 0.0);
        assert_eq!(results.water.outdoor_gal, 0.0);
        assert_eq!(results.energy[0].fuel, Fuel::Electricity);
    }
}
