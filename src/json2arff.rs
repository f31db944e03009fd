/*
cargo run --release --bin json2arff -- \
    data/feature_name_data.json \
    data/feature_name_labeltxt.json \
    data/feature_name_feature.arff \
    --config arff_config.json \
    --scale minmax

bootstrap a config file with the facial-expression defaults:
cargo run --bin json2arff -- --init-config --config arff_config.json
*/

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, TermLogger, TerminalMode, WriteLogger,
};

use json2arff::{convert, Config, ConvertOptions, ScaleMethod};

/// Convert feature/label JSON files into an ARFF relation.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Feature JSON file ({"<key>": {"cols": n, "data": [...]}})
    #[arg(value_name = "FEATURE_FILE", required_unless_present = "init_config")]
    feature_file: Option<PathBuf>,

    /// Label JSON file ({"<key>": "<label>"})
    #[arg(value_name = "LABEL_FILE", required_unless_present = "init_config")]
    label_file: Option<PathBuf>,

    /// ARFF file to create (overwritten if it exists)
    #[arg(value_name = "OUTPUT_FILE", required_unless_present = "init_config")]
    output_file: Option<PathBuf>,

    /// JSON configuration describing the relation and key templates
    #[arg(long, value_name = "PATH", default_value = "arff_config.json")]
    config: PathBuf,

    /// Per-record scaling applied before writing
    #[arg(long, value_enum)]
    scale: Option<ScaleMethod>,

    /// Directory for the run log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Write the default configuration to --config and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        Config::default()
            .save(&cli.config)
            .with_context(|| format!("writing default config to {}", cli.config.display()))?;
        println!("Wrote default configuration to {}", cli.config.display());
        return Ok(());
    }

    // logging setup
    create_dir_all(&cli.log_dir)
        .with_context(|| format!("creating log dir {}", cli.log_dir.display()))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("json2arff_{ts}.log"));
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            LogConfig::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            File::create(&log_path)
                .with_context(|| format!("creating log file {}", log_path.display()))?,
        ),
    ])?;
    info!("Starting json2arff");

    let config = Config::load(&cli.config)?;
    info!("Loaded config {:?} (relation {})", cli.config, config.relation_name);

    // required_unless_present guarantees these once --init-config is not set
    let opts = ConvertOptions {
        feature_file: cli.feature_file.context("FEATURE_FILE is required")?,
        label_file: cli.label_file.context("LABEL_FILE is required")?,
        output_file: cli.output_file.context("OUTPUT_FILE is required")?,
        scale: cli.scale,
        show_progress: true,
    };

    let summary = convert(&opts, &config)
        .with_context(|| format!("converting into {}", opts.output_file.display()))?;

    info!("Finished");
    println!(
        "Wrote {} records × {} attributes{} to {}",
        summary.records,
        summary.attributes,
        summary
            .scale
            .map(|m| format!(" ({m} scaled)"))
            .unwrap_or_default(),
        opts.output_file.display()
    );
    Ok(())
}
