// ========================================================================================
//
//                         THE COMMAND-LINE FRONT END: GAILRISK
//
// ========================================================================================
//
// A thin shell over the library. Every subcommand loads its inputs, hands them to the
// same single-subject assessment path and reports the outcome. No risk arithmetic
// lives here.

#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]

use clap::{CommandFactory, Parser, Subcommand};
use gailrisk::batch::assess_all;
use gailrisk::io::{read_records, write_results};
use gailrisk::{EngineConfig, RiskInput, assess};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

// ========================================================================================
//                         COMMAND-LINE INTERFACE DEFINITION
// ========================================================================================

#[derive(Parser)]
#[command(
    name = "gailrisk",
    version,
    about = "Breast cancer relative and absolute risk under the Gail model",
    long_about = "Recodes questionnaire answers into Gail model risk factors and projects \
                 the absolute risk of invasive breast cancer over a horizon, accounting for \
                 competing mortality."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single subject described in a TOML file
    Assess {
        /// Path to the subject's answers (TOML)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Projection horizon in years (defaults to the configured horizon)
        #[arg(long)]
        years: Option<f64>,

        /// Engine configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Assess every record of a tab-separated file
    Batch {
        /// Path to the records (TSV)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write one result row per record (TSV)
        #[arg(long)]
        out: PathBuf,

        /// Projection horizon in years (defaults to the configured horizon)
        #[arg(long)]
        years: Option<f64>,

        /// Engine configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the default engine configuration
    Config {
        #[arg(long)]
        out: PathBuf,
    },
}

// ========================================================================================
//                                  SUBCOMMANDS
// ========================================================================================

fn load_config(path: Option<&Path>) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            log::info!("Loading engine configuration from {}", path.display());
            Ok(EngineConfig::load(path)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn run_assess(
    input_path: &Path,
    years: Option<f64>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let years = years.unwrap_or(config.projection.horizon_years);

    let input: RiskInput = toml::from_str(&fs::read_to_string(input_path)?)?;
    let assessment = assess(&input, years, &config)?;

    println!("Age:                      {:.1}", assessment.age);
    println!("Horizon:                  {} years", assessment.horizon_years);
    println!("Relative risk:            {:.4}", assessment.relative_risk);
    println!(
        "Absolute risk:            {:.4} ({:.2}%)",
        assessment.absolute_risk,
        assessment.absolute_risk * 100.0
    );
    println!("MHT relative risk:        {:.2}", assessment.mht_relative_risk);
    Ok(())
}

fn run_batch(
    input_path: &Path,
    out_path: &Path,
    years: Option<f64>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let years = years.unwrap_or(config.projection.horizon_years);

    let records = read_records(input_path)?;
    log::info!(
        "Loaded {} records from {}",
        records.len(),
        input_path.display()
    );

    let inputs: Vec<RiskInput> = records.iter().map(|r| r.to_input()).collect();
    let results = assess_all(&inputs, years, &config);
    write_results(out_path, &records, &results)?;

    let rejected = results.iter().filter(|r| r.is_err()).count();
    log::info!(
        "Wrote {} results to {} ({rejected} rejected)",
        results.len(),
        out_path.display()
    );
    Ok(())
}

fn run_config(out_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    EngineConfig::default().save(out_path)?;
    log::info!("Wrote default configuration to {}", out_path.display());
    Ok(())
}

// ========================================================================================
//                                      MAIN
// ========================================================================================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { command } = Cli::parse();
    let result = match command {
        Some(Commands::Assess {
            input,
            years,
            config,
        }) => run_assess(&input, years, config.as_deref()),
        Some(Commands::Batch {
            input,
            out,
            years,
            config,
        }) => run_batch(&input, &out, years, config.as_deref()),
        Some(Commands::Config { out }) => run_config(&out),
        None => Cli::command()
            .print_help()
            .map(|_| println!())
            .map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
