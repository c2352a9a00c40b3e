use serde::Deserialize;
use serde::Serialize;

use crate::error::ReportError;

/// The service's result document. Unknown fields are ignored so additive
/// service changes do not break existing installations.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LciaResult {
    #[serde(default)]
    pub calculation_id: Option<String>,
    pub impacts: Vec<ImpactScore>,
}

impl LciaResult {
    pub fn from_json(body: &str) -> Result<Self, ReportError> {
        serde_json::from_str(body).map_err(ReportError::Parse)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactScore {
    /// Service token for the impact category, e.g. `globalWarmingPotential`.
    pub category: String,
    pub units: String,
    pub total: f64,
    pub by_stage: StageBreakdown,
}

impl ImpactScore {
    /// Human-readable label for the category token; unknown tokens pass
    /// through unchanged.
    pub fn label(&self) -> &str {
        match self.category.as_str() {
            "globalWarmingPotential" => "Global warming potential",
            "acidificationPotential" => "Acidification potential",
            "eutrophicationPotential" => "Eutrophication potential",
            "ozoneDepletionPotential" => "Ozone depletion potential",
            "smogPotential" => "Smog formation potential",
            "primaryEnergy" => "Primary energy use",
            "waterConsumption" => "Water consumption",
            other => other,
        }
    }
}

/// Life-cycle stage breakdown of one impact category. Stages the service
/// omits default to zero.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageBreakdown {
    #[serde(default)]
    pub construction: f64,
    #[serde(default)]
    pub operations: f64,
    #[serde(default)]
    pub maintenance: f64,
    #[serde(default)]
    pub end_of_life: f64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    #[expect(clippy::unwrap_used)]
    fn parses_a_result_document() {
        let body = r#"{
            "calculationId": "calc-7",
            "impacts": [{
                "category": "globalWarmingPotential",
                "units": "kg CO2-eq",
                "total": 125000.5,
                "byStage": {
                    "construction": 40000.0,
                    "operations": 80000.5,
                    "maintenance": 4000.0,
                    "endOfLife": 1000.0
                }
            }],
            "someFutureField": true
        }"#;
        let result = LciaResult::from_json(body).unwrap();
        assert_eq!(result.calculation_id.as_deref(), Some("calc-7"));
        assert_eq!(result.impacts.len(), 1);
        assert_eq!(result.impacts[0].label(), "Global warming potential");
        assert_eq!(result.impacts[0].by_stage.end_of_life, 1000.0);
    }

    #[test]
    fn missing_stages_default_to_zero() {
        let body = r#"{
            "impacts": [{
                "category": "waterConsumption",
                "units": "gal",
                "total": 50000.0,
                "byStage": { "operations": 50000.0 }
            }]
        }"#;
        let result = LciaResult::from_json(body);
        let Ok(result) = result else {
            panic!("expected a parse");
        };
        assert_eq!(result.impacts[0].by_stage.construction, 0.0);
        assert_eq!(result.impacts[0].by_stage.operations, 50000.0);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            LciaResult::from_json("not json"),
            Err(ReportError::Parse(_))
        ));
    }

    #[test]
    fn unknown_category_label_passes_through() {
        let impact = ImpactScore {
            category: "novelMetric".to_string(),
            units: "x".to_string(),
            total: 1.0,
            by_stage: StageBreakdown::default(),
        };
        assert_eq!(impact.label(), "novelMetric");
    }
}
