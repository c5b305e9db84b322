mod cli;

use cuestream::{
    config::{self, persist},
    geometry::{FrameBuilder, Vector3F},
    inspect,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "cuestream=trace,cuestream_format=trace,cuestream_geometry=trace";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before logging is up, so it can supply the filter
    let config = match cli.command {
        Commands::Validate { .. } | Commands::InitConfig { .. } | Commands::Version => None,
        _ => Some(config::load_config_or_default(cli.config.as_deref())?),
    };

    // RUST_LOG wins, then --verbose, then the configured filter
    let filter = match std::env::var("RUST_LOG") {
        Ok(env) => env,
        Err(_) if cli.verbose => VERBOSE_FILTER.to_string(),
        Err(_) => config
            .as_ref()
            .map(|c| c.logging.filter.clone())
            .unwrap_or_else(|| config::LoggingConfig::default().filter),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect {
            file,
            json,
            hint,
            offset,
        } => {
            let mut config = config.unwrap_or_default();
            if let Some(hint) = hint {
                config.decode.format_hint = hint;
            }
            if let Some(offset) = offset {
                config.decode.offset = offset;
            }
            config.output.json |= json;
            inspect_file(&file, &config)
        }
        Commands::Frame {
            position,
            direction,
            up,
            json,
        } => {
            let json = json || config.map(|c| c.output.json).unwrap_or(false);
            build_frame(position, direction, up, json)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::InitConfig { path } => init_config(path),
        Commands::Version => {
            println!("cuestream {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn inspect_file(file: &Path, config: &config::Config) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let summaries = inspect::inspect_file(file, &config.decode, &config.output)?;

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if summaries.is_empty() {
        println!("No action records found.");
    } else {
        print!("{}", inspect::render_text(&summaries));
        println!("\n{} record(s)", summaries.len());
    }

    Ok(())
}

fn build_frame(position: [f32; 3], direction: [f32; 3], up: [f32; 3], json: bool) -> Result<()> {
    let transform = FrameBuilder::new(
        Vector3F::from_array(position),
        Vector3F::from_array(direction),
        Vector3F::from_array(up),
    )
    .build()?;

    let rows = transform.to_rows();

    if json {
        let out = serde_json::json!({
            "position": position,
            "direction": direction,
            "up": up,
            "rows": rows,
            "columns": transform.to_array(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for row in rows {
            println!(
                "{:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                row[0], row[1], row[2], row[3]
            );
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Format hint: {}", config.decode.format_hint);
            println!("  Max records: {}", config.decode.max_records);
            println!("  Start offset: {}", config.decode.offset);
            println!("  JSON output: {}", config.output.json);
            println!("  Placement: {}", config.output.include_placement);
            println!("  Log filter: {}", config.logging.filter);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Max records: {}", config.decode.max_records);
            println!("  Log filter: {}", config.logging.filter);
        }
    }

    Ok(())
}

fn init_config(path: PathBuf) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {:?}", path);
    }
    persist::save_config(&path, &config::Config::default())?;
    println!("Wrote default config to {:?}", path);
    Ok(())
}
