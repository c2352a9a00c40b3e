//! Wire shape of the submission payload: the camelCase JSON document the
//! calculation service expects. Kept separate from the snake_case input
//! types so the on-disk format can evolve without touching the service
//! contract.

use serde::Deserialize;
use serde::Serialize;

use crate::model::CoolingSystem;
use crate::model::DuctLocation;
use crate::model::FoundationType;
use crate::model::HeatingSystem;
use crate::model::Orientation;
use crate::model::WaterHeaterKind;
use crate::results::EnergyUnits;
use crate::results::Fuel;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub general: GeneralSection,
    pub envelope: EnvelopeSection,
    pub hvac: HvacSection,
    pub water_heating: WaterHeatingSection,
    pub appliances: AppliancesSection,
    pub lighting: LightingSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar: Option<SolarSection>,
    pub water_use: WaterUseSection,
    pub energy_use: Vec<EnergyUseRow>,
    pub study_period: StudyPeriodSection,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSection {
    pub state: String,
    pub zip_code: String,
    pub climate_zone: String,
    pub vintage_year: i32,
    pub stories: u32,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub conditioned_floor_area: f64,
    pub foundation_type: FoundationType,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSection {
    pub walls: Vec<WallRow>,
    pub roof_r_value: f64,
    pub roof_area: f64,
    pub foundation_r_value: f64,
    pub windows: Vec<WindowRow>,
    pub infiltration_ach50: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WallRow {
    pub name: String,
    pub r_value: f64,
    pub area: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowRow {
    pub orientation: Orientation,
    pub area: f64,
    pub u_factor: f64,
    pub shgc: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HvacSection {
    pub heating_system: HeatingSystem,
    pub heating_fuel: Fuel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hspf: Option<f64>,
    pub cooling_system: CoolingSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ducts: Option<DuctsSection>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuctsSection {
    pub location: DuctLocation,
    pub leakage_cfm25: f64,
    pub insulation_r_value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterHeatingSection {
    pub kind: WaterHeaterKind,
    pub fuel: Fuel,
    pub energy_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_volume: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppliancesSection {
    pub refrigerator_annual_kwh: f64,
    pub range_fuel: Fuel,
    pub dishwasher_present: bool,
    pub clothes_washer_present: bool,
    pub clothes_dryer_fuel: Fuel,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightingSection {
    pub fraction_led: f64,
    pub fraction_cfl: f64,
    pub fraction_incandescent: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolarSection {
    pub capacity_kw: f64,
    pub tilt: f64,
    pub azimuth: f64,
    pub inverter_efficiency: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterUseSection {
    pub indoor_annual_gal: f64,
    pub outdoor_annual_gal: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyUseRow {
    pub fuel: Fuel,
    pub end_use: WireEndUse,
    pub annual_amount: f64,
    pub units: EnergyUnits,
}

/// End uses as the service spells them. PV generation appears only on the
/// wire, carried as a negative electricity amount.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WireEndUse {
    Heating,
    Cooling,
    WaterHeating,
    Appliances,
    Lighting,
    PlugLoads,
    PvGeneration,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyPeriodSection {
    pub years: u32,
}
