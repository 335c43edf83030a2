//! # dnsprobe
//!
//! Command-line DNS lookup: one domain, one or more record types, one table.

mod bootstrap;
mod output;

use anyhow::Context;
use clap::Parser;
use dnsprobe_application::LookupUseCase;
use dnsprobe_domain::{validators, RecordType};
use dnsprobe_infrastructure::HickoryRecordResolver;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnsprobe")]
#[command(version)]
#[command(about = "Look up DNS records and print them as a table")]
struct Cli {
    /// Domain to look up
    domain: String,

    /// Record type to query (A, AAAA, CNAME, MX, NS, SOA, TXT);
    /// defaults to the configured list
    #[arg(short = 't', long, value_name = "TYPE")]
    record_type: Option<String>,

    /// Path to the YAML config file (default: config.yaml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // config first: logging is configured by it; the source is reported
    // once the sinks exist
    let (config, source) = bootstrap::load_config(cli.config.as_deref())?;
    let _guard = bootstrap::init_logging(&config.logging)?;
    bootstrap::report_config_source(&source);

    // validated before any network activity
    validators::validate_domain(&cli.domain)?;
    let record_types = match &cli.record_type {
        Some(name) => vec![RecordType::from_str(name)?],
        None => config.parsed_record_types(),
    };

    info!(domain = %cli.domain, types = record_types.len(), "starting DNS lookup");

    let resolver =
        HickoryRecordResolver::from_config(&config).context("failed to set up resolver")?;
    let lookup = LookupUseCase::new(Arc::new(resolver));
    let outcomes = lookup.execute_all(&cli.domain, &record_types).await;

    let colored = console::Term::stdout().features().colors_supported();
    print!("{}", output::render_table(&outcomes, colored));

    info!("DNS lookup completed");

    if outcomes.iter().any(|outcome| outcome.is_success()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
