//! dpe-estimator: household energy-performance class estimator

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use dpe_estimator::{
    cli,
    config::{self, AppConfig, ConfigPreset},
    pipeline::{default_profile, exit_codes},
    reports::ReportFormat,
    scoring::DpeClass,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dpe-estimator")]
#[command(author)]
#[command(version)]
#[command(about = "Estimate the energy class (A-G) of a dwelling and suggest renovations", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  A class is worse than --fail-above
    3  Error occurred

EXAMPLES:
    # Print an editable profile, then assess it
    dpe-estimator template > house.yaml
    dpe-estimator assess house.yaml --details

    # CI check on a set of profiles
    dpe-estimator batch homes/*.yaml -o json --fail-above E")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from a named preset (default, ci)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by `assess` and `batch`
#[derive(Parser)]
struct ReportArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when a class is worse than this one
    #[arg(long, value_enum, ignore_case = true)]
    fail_above: Option<DpeClass>,

    /// Show the factors behind the consumption estimate
    #[arg(long)]
    factors: bool,

    /// Show weakness descriptions and recommendation explanations
    #[arg(long)]
    details: bool,

    /// Show at most this many recommendations
    #[arg(long)]
    max_recommendations: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one profile file (YAML or JSON)
    Assess {
        /// Path to the profile answers
        profile: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Assess many profile files in parallel
    Batch {
        /// Paths to the profile answers
        #[arg(required = true)]
        profiles: Vec<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the class thresholds
    Scale {
        /// Output format
        #[arg(short, long, default_value = "summary")]
        output: ReportFormat,
    },

    /// Print a fully answered profile to start from
    Template {
        /// Document format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: cli::TemplateFormat,

        /// Write the template to a file instead of stdout
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate JSON Schema for profile answer files
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a commented example configuration file
    ConfigExample,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl ReportArgs {
    fn overrides(&self, cli: &Cli) -> AppConfig {
        let mut overrides = AppConfig::builder()
            .output_file(self.output_file.clone())
            .no_color(cli.no_color)
            .fail_above(self.fail_above)
            .show_factors(self.factors)
            .show_details(self.details)
            .quiet(cli.quiet)
            .build();
        overrides.behavior.max_recommendations = self.max_recommendations;
        overrides
    }
}

/// File config layered over the optional preset, then validated.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match cli.preset.as_deref() {
        Some(name) => {
            let preset = ConfigPreset::from_name(name).with_context(|| {
                let known: Vec<&str> = ConfigPreset::all().iter().map(|p| p.name()).collect();
                format!("Unknown preset '{name}'. Valid options: {}", known.join(", "))
            })?;
            AppConfig::from_preset(preset)
        }
        None => AppConfig::default(),
    };

    let (config, loaded_from) = config.layer_file(cli.config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    Ok(config)
}

/// Apply command-line report options over the loaded config.
fn report_config(cli: &Cli, args: &ReportArgs) -> Result<AppConfig> {
    let mut config = load_config(cli)?;
    config.merge(&args.overrides(cli));
    if let Some(format) = args.output {
        config.output.format = format;
    }
    Ok(config)
}

fn write_schema(schema: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, schema)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Assess { profile, report } => {
            let config = report_config(cli, report)?;
            cli::run_assess(profile, &config)
        }

        Commands::Batch { profiles, report } => {
            let config = report_config(cli, report)?;
            cli::run_batch(profiles, &config)
        }

        Commands::Scale { output } => {
            cli::run_scale(*output, cli.no_color)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Template {
            format,
            output_file,
        } => {
            let config = load_config(cli)?;
            let defaults = default_profile(&config.defaults)?;
            cli::run_template(*format, &defaults, output_file.clone())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Schema { output } => {
            write_schema(&config::generate_answers_schema()?, output.clone())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            write_schema(&config::generate_json_schema()?, output.clone())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigExample => {
            print!("{}", config::generate_full_example_config());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "dpe-estimator", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay machine-readable
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
