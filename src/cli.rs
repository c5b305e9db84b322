use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cuestream")]
#[command(author, version, about = "Scene action record inspector")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode the action records in a file and display them
    Inspect {
        /// File to decode
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Format hint passed to every record (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        hint: Option<i16>,

        /// Byte offset of the first record (overrides config)
        #[arg(long)]
        offset: Option<usize>,
    },

    /// Build a placement transform from position, direction and up vectors
    Frame {
        /// Position as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        position: [f32; 3],

        /// Facing direction as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        direction: [f32; 3],

        /// Up vector as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        up: [f32; 3],

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        #[arg(default_value = "cuestream.toml")]
        path: PathBuf,
    },

    /// Display version information
    Version,
}

/// Parse `x,y,z` into three floats.
pub fn parse_vector(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got {:?}", s));
    }

    let mut out = [0.0f32; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid component {:?}: {}", part, e))?;
    }
    Ok(out)
}
