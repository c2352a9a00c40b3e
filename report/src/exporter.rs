use std::path::Path;

use askama::Template;
use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

use crate::error::ReportError;
use crate::result::LciaResult;

/// Building characteristics echoed into the report header so a reader can
/// tell which model the impacts belong to.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingSummary {
    pub state: String,
    pub climate_zone: String,
    pub conditioned_floor_area_ft2: f64,
    pub study_period_years: u32,
}

/// Writes every report artifact for one calculation into an output
/// directory.
#[derive(Debug)]
pub struct ReportExporter<'a> {
    result: &'a LciaResult,
    building: &'a BuildingSummary,
    generated_at: DateTime<Utc>,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    generated: String,
    calculation_id: &'a Option<String>,
    state: &'a str,
    climate_zone: &'a str,
    floor_area: String,
    study_period_years: u32,
    impacts: Vec<ImpactRow>,
}

struct ImpactRow {
    label: String,
    units: String,
    construction: String,
    operations: String,
    maintenance: String,
    end_of_life: String,
    total: String,
}

impl<'a> ReportExporter<'a> {
    pub fn new(result: &'a LciaResult, building: &'a BuildingSummary) -> Self {
        Self {
            result,
            building,
            generated_at: Utc::now(),
        }
    }

    /// Pin the generation timestamp; the default is the current time.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Write `report.html` and `impacts.csv` into `output_dir`, creating the
    /// directory if needed.
    pub fn export_all(&self, output_dir: &Path) -> Result<(), ReportError> {
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }
        let html_path = output_dir.join("report.html");
        std::fs::write(&html_path, self.render_html()?).map_err(|source| ReportError::Io {
            path: html_path.clone(),
            source,
        })?;
        let csv_path = output_dir.join("impacts.csv");
        std::fs::write(&csv_path, self.render_csv()).map_err(|source| ReportError::Io {
            path: csv_path.clone(),
            source,
        })
    }

    pub fn render_html(&self) -> Result<String, ReportError> {
        let impacts = self
            .result
            .impacts
            .iter()
            .map(|impact| ImpactRow {
                label: impact.label().to_string(),
                units: impact.units.clone(),
                construction: format_amount(impact.by_stage.construction),
                operations: format_amount(impact.by_stage.operations),
                maintenance: format_amount(impact.by_stage.maintenance),
                end_of_life: format_amount(impact.by_stage.end_of_life),
                total: format_amount(impact.total),
            })
            .collect();
        let template = ReportTemplate {
            generated: self
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            calculation_id: &self.result.calculation_id,
            state: &self.building.state,
            climate_zone: &self.building.climate_zone,
            floor_area: format_amount(self.building.conditioned_floor_area_ft2),
            study_period_years: self.building.study_period_years,
            impacts,
        };
        template.render().map_err(ReportError::Render)
    }

    /// One row per impact category and life-cycle stage, plus a total row.
    pub fn render_csv(&self) -> String {
        let mut out = String::from("category,stage,amount,units\n");
        for impact in &self.result.impacts {
            let stages = [
                ("construction", impact.by_stage.construction),
                ("operations", impact.by_stage.operations),
                ("maintenance", impact.by_stage.maintenance),
                ("end_of_life", impact.by_stage.end_of_life),
                ("total", impact.total),
            ];
            for (stage, amount) in stages {
                out.push_str(&format!(
                    "{},{stage},{amount},{}\n",
                    csv_field(impact.label()),
                    csv_field(&impact.units),
                ));
            }
        }
        out
    }
}

fn format_amount(amount: f64) -> String {
    if amount.abs() >= 100.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

/// RFC 4180 quoting: fields containing a comma, quote, or newline are
/// wrapped in quotes with embedded quotes doubled.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
