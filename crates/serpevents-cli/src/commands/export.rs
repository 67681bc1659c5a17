//! Fetch-and-export commands: CSV and ICS.

use std::path::Path;
use std::time::Duration;

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use serpevents_core::{CalendarOptions, NormalizedEvent, build_calendar, to_csv};
use serpevents_providers::{SearchParams, SerpApiClient, normalize_events};

use crate::cli::ExportArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches events and writes the tabular export.
pub async fn csv(args: ExportArgs, config: &CliConfig) -> CliResult<()> {
    let events = fetch_normalized(&args, config).await?;
    let out = args
        .out
        .unwrap_or_else(|| config.default_output("events.csv"));
    write_output(&out, &to_csv(&events))?;
    info!(count = events.len(), path = %out.display(), "CSV export written");
    Ok(())
}

/// Fetches events and writes the all-day calendar document.
pub async fn ics(args: ExportArgs, year: Option<i32>, config: &CliConfig) -> CliResult<()> {
    let events = fetch_normalized(&args, config).await?;

    // The emitter never reads the clock; "this year" is decided here.
    let reference_year = year.unwrap_or_else(|| Utc::now().year());
    let build = build_calendar(&events, &CalendarOptions { reference_year });
    for skipped in &build.skipped {
        warn!(
            index = skipped.index,
            title = %skipped.title,
            "event left out of calendar: no usable date"
        );
    }

    let out = args
        .out
        .unwrap_or_else(|| config.default_output("events.ics"));
    write_output(&out, &build.document)?;
    info!(
        count = events.len() - build.skipped.len(),
        skipped = build.skipped.len(),
        path = %out.display(),
        "calendar written"
    );
    Ok(())
}

async fn fetch_normalized(args: &ExportArgs, config: &CliConfig) -> CliResult<Vec<NormalizedEvent>> {
    let api_key = args
        .api_key
        .clone()
        .or_else(|| config.api_key.clone())
        .ok_or(CliError::MissingApiKey)?;
    let query = args.query.clone().unwrap_or_else(|| config.query.clone());

    let mut params = SearchParams::new(query);
    params.location = config.search.location.clone();
    params.hl = config.search.hl.clone();
    params.gl = config.search.gl.clone();

    let client = SerpApiClient::new(api_key, FETCH_TIMEOUT);
    let raw = client.search_events(&params).await?;
    info!(count = raw.len(), "fetched raw event records");

    Ok(normalize_events(&raw))
}

fn write_output(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
