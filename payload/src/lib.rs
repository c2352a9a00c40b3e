//! Assembly of the LCIA submission payload.
//!
//! A residential building description and an annual simulation-results
//! table are merged into the camelCase JSON document
//! the calculation service expects. The client crate carries that document
//! as an opaque string; everything the service sees is defined here.

mod assemble;
mod error;
mod model;
mod request;
mod results;

pub use assemble::assemble;
pub use assemble::to_request_body;
pub use error::PayloadError;
pub use model::Appliances;
pub use model::BuildingModel;
pub use model::Cooling;
pub use model::CoolingSystem;
pub use model::DuctLocation;
pub use model::Ducts;
pub use model::Envelope;
pub use model::FoundationType;
pub use model::General;
pub use model::Heating;
pub use model::HeatingSystem;
pub use model::Hvac;
pub use model::Lighting;
pub use model::Orientation;
pub use model::SolarPv;
pub use model::WallConstruction;
pub use model::WaterHeater;
pub use model::WaterHeaterKind;
pub use model::Window;
pub use request::AppliancesSection;
pub use request::DuctsSection;
pub use request::EnergyUseRow;
pub use request::EnvelopeSection;
pub use request::GeneralSection;
pub use request::HvacSection;
pub use request::LightingSection;
pub use request::SolarSection;
pub use request::StudyPeriodSection;
pub use request::Submission;
pub use request::WallRow;
pub use request::WaterHeatingSection;
pub use request::WaterUseSection;
pub use request::WindowRow;
pub use request::WireEndUse;
pub use results::AnnualResults;
pub use results::EndUse;
pub use results::EnergyUnits;
pub use results::EnergyUse;
pub use results::Fuel;
pub use results::WaterUse;
