//! Command-line interface
//!
//! ## Commands
//!
//! - `popdash show` - Dashboard for a year and color theme
//! - `popdash years` - Years available in the data, latest first
//! - `popdash themes` - Color themes offered by the theme selector
//! - `popdash export` - Write the long-format table to CSV or Parquet
//!
//! ## Configuration
//!
//! - `POPDASH_DATA` - Wide population table (`.csv` or `.parquet`)
//! - `POPDASH_THEME` - Color theme (default: `blues`)
//! - `POPDASH_FORMAT` - Output format, `text` or `json` (default: `text`)

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};

use crate::algorithm::{available_years, default_year};
use crate::config::{COLOR_THEMES, DEFAULT_MIGRATION_THRESHOLD, DashboardConfig, LoaderConfig};
use crate::dashboard::{ColorTheme, DashboardView};
use crate::export::export_long_table;
use crate::loader::load_population_table;
use crate::models::PopulationTable;
use crate::utils::logging::render_dashboard;

/// US population dashboard over a wide table of state populations per year.
#[derive(Debug, Parser)]
#[command(name = "popdash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wide population table: state name, state code, one column per year.
    #[arg(long, env = "POPDASH_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Output format.
    #[arg(long, env = "POPDASH_FORMAT", default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Accept state codes that are not exactly two letters.
    #[arg(long, global = true)]
    pub relaxed_state_codes: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the dashboard for a year.
    Show(ShowArgs),
    /// List the years present in the data.
    Years,
    /// List the available color themes.
    Themes,
    /// Export the long-format table.
    Export(ExportArgs),
}

/// Arguments of `popdash show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Year to show. Defaults to the earliest year in the data.
    #[arg(long)]
    pub year: Option<i32>,

    /// Color theme for the map and heatmap. Defaults to the configured theme.
    #[arg(
        long,
        env = "POPDASH_THEME",
        value_parser = PossibleValuesParser::new(COLOR_THEMES)
    )]
    pub theme: Option<String>,

    /// Change beyond which a state counts as high inbound/outbound.
    #[arg(long, default_value_t = DEFAULT_MIGRATION_THRESHOLD)]
    pub threshold: i64,

    /// Show only this many rows in the top states table.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Arguments of `popdash export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file (`.csv` or `.parquet`).
    #[arg(long, short)]
    pub output: PathBuf,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

impl Cli {
    /// Loader settings derived from the flags
    #[must_use]
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            validate_state_codes: !self.relaxed_state_codes,
            ..Default::default()
        }
    }

    fn load_table(&self) -> Result<PopulationTable> {
        let path = self
            .data
            .as_deref()
            .context("no population table given, pass --data or set POPDASH_DATA")?;
        load_table_from(path, &self.loader_config())
    }
}

fn load_table_from(path: &Path, config: &LoaderConfig) -> Result<PopulationTable> {
    load_population_table(path, config)
        .with_context(|| format!("Failed to load population table {}", path.display()))
}

/// Execute a parsed command line, writing results to `out`
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Show(args) => show(cli, args, out),
        Commands::Years => {
            let years = available_years(&cli.load_table()?);
            match cli.format {
                OutputFormat::Text => {
                    for year in years {
                        writeln!(out, "{year}")?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&years)?)?,
            }
            Ok(())
        }
        Commands::Themes => {
            match cli.format {
                OutputFormat::Text => {
                    for theme in COLOR_THEMES {
                        writeln!(out, "{theme}")?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&COLOR_THEMES)?)?,
            }
            Ok(())
        }
        Commands::Export(args) => {
            let table = cli.load_table()?;
            let rows = export_long_table(&table, &args.output)
                .with_context(|| format!("Failed to export to {}", args.output.display()))?;
            if cli.format == OutputFormat::Text {
                writeln!(out, "Exported {rows} rows to {}", args.output.display())?;
            }
            Ok(())
        }
    }
}

fn show(cli: &Cli, args: &ShowArgs, out: &mut impl Write) -> Result<()> {
    let table = cli.load_table()?;
    let year = match args.year {
        Some(year) => year,
        None => default_year(&table).context("population table has no years")?,
    };

    let config = DashboardConfig {
        migration_threshold: args.threshold,
        top_states_limit: args.top,
        ..Default::default()
    };
    let theme = ColorTheme::new(args.theme.as_deref().unwrap_or(&config.default_theme));

    let view = match DashboardView::build(&table, year, theme, &config) {
        Ok(view) => view,
        Err(err) if err.is_invalid_year() => {
            return Err(anyhow::Error::new(err)
                .context("Pick one of the years listed by `popdash years`"));
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("Failed to build dashboard for {year}")));
        }
    };

    match cli.format {
        OutputFormat::Text => write!(out, "{}", render_dashboard(&view))?,
        OutputFormat::Json => writeln!(out, "{}", view.to_json()?)?,
    }
    Ok(())
}
