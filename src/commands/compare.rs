use crate::comparison::ComparisonEngine;
use crate::config::{load_config, load_config_file, ComparisonConfig};
use crate::errors::Error;
use crate::facility::{load_facility, load_route, RouteLookup};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, ComparisonReport, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct CompareConfig {
    pub facility_a: PathBuf,
    pub facility_b: PathBuf,
    pub route_a: Option<PathBuf>,
    pub route_b: Option<PathBuf>,
    pub pending_routes: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// Resolve the effective config: an explicit path must load, discovery may fall back.
pub fn resolve_config(path: Option<&Path>) -> Result<ComparisonConfig> {
    match path {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

fn resolve_route(path: Option<&Path>, pending: bool) -> Result<RouteLookup> {
    match path {
        Some(path) => {
            load_route(path).with_context(|| format!("Failed to load route {}", path.display()))
        }
        None if pending => Ok(RouteLookup::Pending),
        None => Ok(RouteLookup::Unavailable),
    }
}

pub fn handle_compare(config: CompareConfig) -> Result<()> {
    let facility_a = load_facility(&config.facility_a)
        .with_context(|| format!("Failed to load {}", config.facility_a.display()))?;
    let facility_b = load_facility(&config.facility_b)
        .with_context(|| format!("Failed to load {}", config.facility_b.display()))?;
    let route_a = resolve_route(config.route_a.as_deref(), config.pending_routes)?;
    let route_b = resolve_route(config.route_b.as_deref(), config.pending_routes)?;

    let engine = ComparisonEngine::new(resolve_config(config.config.as_deref())?);
    let data = engine
        .compare(Some(&facility_a), Some(&facility_b), &route_a, &route_b)
        .ok_or_else(|| Error::incomplete("both facilities are required for a comparison"))?;

    tracing::info!(
        facility_a = facility_a.display_name(),
        facility_b = facility_b.display_name(),
        score_a = data.score_a,
        score_b = data.score_b,
        "comparison finished"
    );

    let report = ComparisonReport::new(&facility_a, &facility_b, data, &route_a, &route_b);
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    // Files never get ANSI escapes.
    let formatting = if config.output.is_some() {
        FormattingConfig::plain()
    } else {
        config.formatting
    };

    let mut writer = create_writer(config.format, sink, formatting);
    writer
        .write_comparison(&report)
        .context("Failed to write comparison report")?;
    Ok(())
}
