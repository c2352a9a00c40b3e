//! Residential building description: the half of the submission that comes
//! from the model rather than from simulation results.
//!
//! The on-disk format is a snake_case JSON document owned by this tool; the
//! camelCase wire shape lives in [`crate::request`].

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::PayloadError;
use crate::results::Fuel;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BuildingModel {
    pub general: General,
    pub envelope: Envelope,
    pub hvac: Hvac,
    pub water_heater: WaterHeater,
    pub appliances: Appliances,
    pub lighting: Lighting,
    #[serde(default)]
    pub solar: Option<SolarPv>,
    /// Years the life-cycle assessment covers.
    pub study_period_years: u32,
}

impl BuildingModel {
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
pub struct General {
    pub state: String,
    pub zip_code: String,
    /// IECC climate zone designation, e.g. `"4A"`.
    pub climate_zone: String,
    pub vintage_year: i32,
    pub stories: u32,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub conditioned_floor_area_ft2: f64,
    pub foundation: FoundationType,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FoundationType {
    SlabOnGrade,
    Crawlspace,
    ConditionedBasement,
    UnconditionedBasement,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Envelope {
    pub walls: Vec<WallConstruction>,
    pub roof_r_value: f64,
    pub roof_area_ft2: f64,
    pub foundation_r_value: f64,
    pub windows: Vec<Window>,
    /// Air changes per hour at a 50 Pa pressure difference.
    pub infiltration_ach50: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WallConstruction {
    pub name: String,
    pub r_value: f64,
    pub area_ft2: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Window {
    pub orientation: Orientation,
    pub area_ft2: f64,
    pub u_factor: f64,
    pub shgc: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Hvac {
    pub heating: Heating,
    pub cooling: Cooling,
    #[serde(default)]
    pub ducts: Option<Ducts>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Heating {
    pub system: HeatingSystem,
    pub fuel: Fuel,
    /// Annual fuel utilization efficiency for combustion systems.
    #[serde(default)]
    pub afue: Option<f64>,
    /// Heating seasonal performance factor for heat pumps.
    #[serde(default)]
    pub hspf: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeatingSystem {
    Furnace,
    Boiler,
    HeatPump,
    ElectricResistance,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Cooling {
    pub system: CoolingSystem,
    #[serde(default)]
    pub seer: Option<f64>,
    #[serde(default)]
    pub eer: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoolingSystem {
    CentralAirConditioner,
    RoomAirConditioner,
    HeatPump,
    None,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Ducts {
    pub location: DuctLocation,
    pub leakage_cfm25: f64,
    pub insulation_r_value: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuctLocation {
    ConditionedSpace,
    Attic,
    Crawlspace,
    Basement,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WaterHeater {
    pub kind: WaterHeaterKind,
    pub fuel: Fuel,
    pub energy_factor: f64,
    #[serde(default)]
    pub storage_volume_gal: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaterHeaterKind {
    Storage,
    Tankless,
    HeatPump,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Appliances {
    pub refrigerator_annual_kwh: f64,
    pub range_fuel: Fuel,
    pub dishwasher_present: bool,
    pub clothes_washer_present: bool,
    pub clothes_dryer_fuel: Fuel,
}

/// Fraction of installed lamps by technology; must sum to 1.0.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Lighting {
    pub fraction_led: f64,
    pub fraction_cfl: f64,
    pub fraction_incandescent: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SolarPv {
    pub capacity_kw: f64,
    pub tilt_deg: f64,
    pub azimuth_deg: f64,
    pub inverter_efficiency: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_is_an_io_error() {
        let err = BuildingModel::from_file(Path::new("/definitely/not/here/model.json"));
        assert!(matches!(err, Err(PayloadError::Io { .. })));
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn malformed_model_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, r#"{ "general": "not an object" }"#).unwrap();
        assert!(matches!(
            BuildingModel::from_file(&path),
            Err(PayloadError::Parse { .. })
        ));
    }
}
