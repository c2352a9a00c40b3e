use crate::error::PayloadError;
use crate::model::BuildingModel;
use crate::request::AppliancesSection;
use crate::request::DuctsSection;
use crate::request::EnergyUseRow;
use crate::request::EnvelopeSection;
use crate::request::GeneralSection;
use crate::request::HvacSection;
use crate::request::LightingSection;
use crate::request::SolarSection;
use crate::request::StudyPeriodSection;
use crate::request::Submission;
use crate::request::WallRow;
use crate::request::WaterHeatingSection;
use crate::request::WaterUseSection;
use crate::request::WindowRow;
use crate::request::WireEndUse;
use crate::results::AnnualResults;
use crate::results::EndUse;
use crate::results::EnergyUnits;
use crate::results::Fuel;

const LIGHTING_FRACTION_TOLERANCE: f64 = 1e-6;

/// Merge the building description and the annual results into the document
/// the calculation service accepts.
pub fn assemble(
    model: &BuildingModel,
    results: &AnnualResults,
) -> Result<Submission, PayloadError> {
    validate(model, results)?;

    let general = GeneralSection {
        state: model.general.state.clone(),
        zip_code: model.general.zip_code.clone(),
        climate_zone: model.general.climate_zone.clone(),
        vintage_year: model.general.vintage_year,
        stories: model.general.stories,
        bedrooms: model.general.bedrooms,
        bathrooms: model.general.bathrooms,
        conditioned_floor_area: model.general.conditioned_floor_area_ft2,
        foundation_type: model.general.foundation,
    };

    let envelope = EnvelopeSection {
        walls: model
            .envelope
            .walls
            .iter()
            .map(|w| WallRow {
                name: w.name.clone(),
                r_value: w.r_value,
                area: w.area_ft2,
            })
            .collect(),
        roof_r_value: model.envelope.roof_r_value,
        roof_area: model.envelope.roof_area_ft2,
        foundation_r_value: model.envelope.foundation_r_value,
        windows: model
            .envelope
            .windows
            .iter()
            .map(|w| WindowRow {
                orientation: w.orientation,
                area: w.area_ft2,
                u_factor: w.u_factor,
                shgc: w.shgc,
            })
            .collect(),
        infiltration_ach50: model.envelope.infiltration_ach50,
    };

    let hvac = HvacSection {
        heating_system: model.hvac.heating.system,
        heating_fuel: model.hvac.heating.fuel,
        afue: model.hvac.heating.afue,
        hspf: model.hvac.heating.hspf,
        cooling_system: model.hvac.cooling.system,
        seer: model.hvac.cooling.seer,
        eer: model.hvac.cooling.eer,
        ducts: model.hvac.ducts.as_ref().map(|d| DuctsSection {
            location: d.location,
            leakage_cfm25: d.leakage_cfm25,
            insulation_r_value: d.insulation_r_value,
        }),
    };

    let water_heating = WaterHeatingSection {
        kind: model.water_heater.kind,
        fuel: model.water_heater.fuel,
        energy_factor: model.water_heater.energy_factor,
        storage_volume: model.water_heater.storage_volume_gal,
    };

    let appliances = AppliancesSection {
        refrigerator_annual_kwh: model.appliances.refrigerator_annual_kwh,
        range_fuel: model.appliances.range_fuel,
        dishwasher_present: model.appliances.dishwasher_present,
        clothes_washer_present: model.appliances.clothes_washer_present,
        clothes_dryer_fuel: model.appliances.clothes_dryer_fuel,
    };

    let lighting = LightingSection {
        fraction_led: model.lighting.fraction_led,
        fraction_cfl: model.lighting.fraction_cfl,
        fraction_incandescent: model.lighting.fraction_incandescent,
    };

    let solar = model.solar.as_ref().map(|pv| SolarSection {
        capacity_kw: pv.capacity_kw,
        tilt: pv.tilt_deg,
        azimuth: pv.azimuth_deg,
        inverter_efficiency: pv.inverter_efficiency,
    });

    let mut energy_use: Vec<EnergyUseRow> = results
        .energy
        .iter()
        .map(|row| EnergyUseRow {
            fuel: row.fuel,
            end_use: wire_end_use(row.end_use),
            annual_amount: row.annual_amount,
            units: row.units,
        })
        .collect();
    if results.pv_generation_kwh > 0.0 {
        energy_use.push(EnergyUseRow {
            fuel: Fuel::Electricity,
            end_use: WireEndUse::PvGeneration,
            annual_amount: -results.pv_generation_kwh,
            units: EnergyUnits::KilowattHours,
        });
    }

    Ok(Submission {
        general,
        envelope,
        hvac,
        water_heating,
        appliances,
        lighting,
        solar,
        water_use: WaterUseSection {
            indoor_annual_gal: results.water.indoor_gal,
            outdoor_annual_gal: results.water.outdoor_gal,
        },
        energy_use,
        study_period: StudyPeriodSection {
            years: model.study_period_years,
        },
    })
}

/// Assemble and serialize in one step; the string becomes the session's
/// request body.
pub fn to_request_body(
    model: &BuildingModel,
    results: &AnnualResults,
) -> Result<String, PayloadError> {
    let submission = assemble(model, results)?;
    serde_json::to_string(&submission).map_err(PayloadError::Serialize)
}

fn wire_end_use(end_use: EndUse) -> WireEndUse {
    match end_use {
        EndUse::Heating => WireEndUse::Heating,
        EndUse::Cooling => WireEndUse::Cooling,
        EndUse::WaterHeating => WireEndUse::WaterHeating,
        EndUse::Appliances => WireEndUse::Appliances,
        EndUse::Lighting => WireEndUse::Lighting,
        EndUse::PlugLoads => WireEndUse::PlugLoads,
    }
}

fn validate(model: &BuildingModel, results: &AnnualResults) -> Result<(), PayloadError> {
    if model.general.conditioned_floor_area_ft2 <= 0.0 {
        return Err(PayloadError::NonPositiveFloorArea(
            model.general.conditioned_floor_area_ft2,
        ));
    }
    if model.study_period_years == 0 {
        return Err(PayloadError::ZeroStudyPeriod);
    }
    let fractions = model.lighting.fraction_led
        + model.lighting.fraction_cfl
        + model.lighting.fraction_incandescent;
    if (fractions - 1.0).abs() > LIGHTING_FRACTION_TOLERANCE {
        return Err(PayloadError::UnbalancedLightingFractions(fractions));
    }
    for row in &results.energy {
        if row.annual_amount < 0.0 {
            return Err(PayloadError::NegativeEnergyUse {
                fuel: row.fuel.to_string(),
                end_use: row.end_use.to_string(),
                amount: row.annual_amount,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::Appliances;
    use crate::model::Cooling;
    use crate::model::CoolingSystem;
    use crate::model::Envelope;
    use crate::model::FoundationType;
    use crate::model::General;
    use crate::model::Heating;
    use crate::model::HeatingSystem;
    use crate::model::Hvac;
    use crate::model::Lighting;
    use crate::model::Orientation;
    use crate::model::SolarPv;
    use crate::model::WallConstruction;
    use crate::model::WaterHeater;
    use crate::model::WaterHeaterKind;
    use crate::model::Window;
    use crate::results::EnergyUse;
    use crate::results::WaterUse;

    fn sample_model() -> BuildingModel {
        BuildingModel {
            general: General {
                state: "MD".to_string(),
                zip_code: "20899".to_string(),
                climate_zone: "4A".to_string(),
                vintage_year: 2015,
                stories: 2,
                bedrooms: 3,
                bathrooms: 2.5,
                conditioned_floor_area_ft2: 2200.0,
                foundation: FoundationType::ConditionedBasement,
            },
            envelope: Envelope {
                walls: vec![WallConstruction {
                    name: "wood frame R-20".to_string(),
                    r_value: 20.0,
                    area_ft2: 1800.0,
                }],
                roof_r_value: 49.0,
                roof_area_ft2: 1300.0,
                foundation_r_value: 10.0,
                windows: vec![Window {
                    orientation: Orientation::South,
                    area_ft2: 120.0,
                    u_factor: 0.30,
                    shgc: 0.35,
                }],
                infiltration_ach50: 3.0,
            },
            hvac: Hvac {
                heating: Heating {
                    system: HeatingSystem::Furnace,
                    fuel: Fuel::NaturalGas,
                    afue: Some(0.95),
                    hspf: None,
                },
                cooling: Cooling {
                    system: CoolingSystem::CentralAirConditioner,
                    seer: Some(16.0),
                    eer: None,
                },
                ducts: None,
            },
            water_heater: WaterHeater {
                kind: WaterHeaterKind::Storage,
                fuel: Fuel::NaturalGas,
                energy_factor: 0.67,
                storage_volume_gal: Some(50.0),
            },
            appliances: Appliances {
                refrigerator_annual_kwh: 450.0,
                range_fuel: Fuel::Electricity,
                dishwasher_present: true,
                clothes_washer_present: true,
                clothes_dryer_fuel: Fuel::Electricity,
            },
            lighting: Lighting {
                fraction_led: 0.9,
                fraction_cfl: 0.1,
                fraction_incandescent: 0.0,
            },
            solar: Some(SolarPv {
                capacity_kw: 5.2,
                tilt_deg: 30.0,
                azimuth_deg: 180.0,
                inverter_efficiency: 0.96,
            }),
            study_period_years: 60,
        }
    }

    fn sample_results() -> AnnualResults {
        AnnualResults {
            energy: vec![
                EnergyUse {
                    fuel: Fuel::NaturalGas,
                    end_use: EndUse::Heating,
                    annual_amount: 450.0,
                    units: EnergyUnits::Therms,
                },
                EnergyUse {
                    fuel: Fuel::Electricity,
                    end_use: EndUse::Cooling,
                    annual_amount: 1800.0,
                    units: EnergyUnits::KilowattHours,
                },
            ],
            pv_generation_kwh: 6200.0,
            water: WaterUse {
                indoor_gal: 42000.0,
                outdoor_gal: 8000.0,
            },
        }
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn general_section_serializes_camel_case() {
        let submission = assemble(&sample_model(), &sample_results()).unwrap();
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value["general"],
            json!({
                "state": "MD",
                "zipCode": "20899",
                "climateZone": "4A",
                "vintageYear": 2015,
                "stories": 2,
                "bedrooms": 3,
                "bathrooms": 2.5,
                "conditionedFloorArea": 2200.0,
                "foundationType": "conditioned_basement",
            })
        );
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn pv_generation_lands_as_a_negative_electricity_row() {
        let submission = assemble(&sample_model(), &sample_results()).unwrap();
        let value = serde_json::to_value(&submission).unwrap();
        let rows = value["energyUse"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[2],
            json!({
                "fuel": "electricity",
                "endUse": "pvGeneration",
                "annualAmount": -6200.0,
                "units": "kilowatt_hours",
            })
        );
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn absent_pv_adds_no_generation_row() {
        let mut results = sample_results();
        results.pv_generation_kwh = 0.0;
        let submission = assemble(&sample_model(), &results).unwrap();
        assert_eq!(submission.energy_use.len(), 2);
    }

    #[test]
    fn zero_floor_area_is_rejected() {
        let mut model = sample_model();
        model.general.conditioned_floor_area_ft2 = 0.0;
        assert!(matches!(
            assemble(&model, &sample_results()),
            Err(PayloadError::NonPositiveFloorArea(_))
        ));
    }

    #[test]
    fn zero_study_period_is_rejected() {
        let mut model = sample_model();
        model.study_period_years = 0;
        assert!(matches!(
            assemble(&model, &sample_results()),
            Err(PayloadError::ZeroStudyPeriod)
        ));
    }

    #[test]
    fn unbalanced_lighting_fractions_are_rejected() {
        let mut model = sample_model();
        model.lighting.fraction_incandescent = 0.4;
        assert!(matches!(
            assemble(&model, &sample_results()),
            Err(PayloadError::UnbalancedLightingFractions(_))
        ));
    }

    #[test]
    fn negative_energy_use_is_rejected() {
        let mut results = sample_results();
        results.energy[0].annual_amount = -1.0;
        assert!(matches!(
            assemble(&sample_model(), &results),
            Err(PayloadError::NegativeEnergyUse { .. })
        ));
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn request_body_round_trips_through_the_wire_types() {
        let body = to_request_body(&sample_model(), &sample_results()).unwrap();
        let parsed: Submission = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, assemble(&sample_model(), &sample_results()).unwrap());
    }
}
