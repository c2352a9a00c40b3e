use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use lcia_client::RetryPolicy;
use lcia_client::Session;
use lcia_client::run_calculation;
use lcia_client::try_read_auth_json;
use lcia_client::write_auth_json;
use lcia_payload::AnnualResults;
use lcia_payload::BuildingModel;
use lcia_payload::to_request_body;
use lcia_report::BuildingSummary;
use lcia_report::LciaResult;
use lcia_report::ReportExporter;
use tracing::info;

#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Building description JSON.
    #[clap(long, value_name = "FILE")]
    pub model: PathBuf,

    /// Annual simulation results JSON.
    #[clap(long, value_name = "FILE")]
    pub results: PathBuf,

    /// Credentials file holding the access and refresh tokens.
    #[clap(long, value_name = "FILE", required_unless_present = "payload_only")]
    pub auth: Option<PathBuf>,

    /// Directory the artifacts are written into.
    #[clap(long, value_name = "DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Calculation submission endpoint.
    #[clap(long, value_name = "URL", required_unless_present = "payload_only")]
    pub submit_url: Option<String>,

    /// Credential refresh endpoint.
    #[clap(long, value_name = "URL", required_unless_present = "payload_only")]
    pub refresh_url: Option<String>,

    /// Seconds between poll attempts and between refresh retries.
    #[clap(long, default_value_t = 5)]
    pub poll_interval_secs: u64,

    /// Credential refreshes allowed per unit of work.
    #[clap(long, default_value_t = 5)]
    pub max_refresh_attempts: u32,

    /// Overall wall-clock bound on polling, in seconds. Unbounded when
    /// omitted.
    #[clap(long, value_name = "SECS")]
    pub deadline_secs: Option<u64>,

    /// Assemble and write the payload without contacting the service.
    #[clap(long)]
    pub payload_only: bool,
}

pub async fn run_main(args: RunArgs) -> anyhow::Result<()> {
    let model = BuildingModel::from_file(&args.model)?;
    let results = AnnualResults::from_file(&args.results)?;
    let request_body = to_request_body(&model, &results)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("could not create {}", args.out_dir.display()))?;

    if args.payload_only {
        let path = args.out_dir.join("payload.json");
        std::fs::write(&path, &request_body)
            .with_context(|| format!("could not write {}", path.display()))?;
        info!("payload written to {}", path.display());
        return Ok(());
    }

    // clap enforces these when --payload-only is absent.
    let submit_url = args.submit_url.context("--submit-url is required")?;
    let refresh_url = args.refresh_url.context("--refresh-url is required")?;
    let auth_path = args.auth.context("--auth is required")?;

    let mut auth = try_read_auth_json(&auth_path)?;
    let mut session = Session::new(
        &submit_url,
        &refresh_url,
        &auth.access_token,
        &auth.refresh_token,
        request_body,
    );
    let policy = RetryPolicy {
        poll_interval: Duration::from_secs(args.poll_interval_secs),
        max_refresh_attempts: args.max_refresh_attempts,
        deadline: args.deadline_secs.map(Duration::from_secs),
    };

    let result = run_calculation(&mut session, &policy).await?;

    // Keep a rotated bearer credential for the next invocation.
    if session.bearer_key() != auth.access_token {
        auth.rotate_access_token(session.bearer_key().to_string());
        write_auth_json(&auth_path, &auth)?;
        info!("rotated access token persisted to {}", auth_path.display());
    }

    let Some(result_body) = result else {
        anyhow::bail!("calculation produced no result; the reason is in the log above");
    };

    // Persist the raw document before parsing so a contract change on the
    // service side never loses data.
    let raw_path = args.out_dir.join("result.json");
    std::fs::write(&raw_path, &result_body)
        .with_context(|| format!("could not write {}", raw_path.display()))?;

    let parsed = LciaResult::from_json(&result_body)
        .with_context(|| format!("raw result preserved at {}", raw_path.display()))?;
    let summary = BuildingSummary {
        state: model.general.state.clone(),
        climate_zone: model.general.climate_zone.clone(),
        conditioned_floor_area_ft2: model.general.conditioned_floor_area_ft2,
        study_period_years: model.study_period_years,
    };
    ReportExporter::new(&parsed, &summary).export_all(&args.out_dir)?;
    info!("reports written to {}", args.out_dir.display());
    Ok(())
}
