use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecodeConfig {
    /// Format hint passed to every record decoder. Stored on each record,
    /// not interpreted.
    #[serde(default)]
    pub format_hint: i16,

    /// Stop after this many records
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    /// Byte offset of the first record in the input
    #[serde(default)]
    pub offset: usize,
}

fn default_max_records() -> usize {
    4096
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            format_hint: 0,
            max_records: default_max_records(),
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print JSON instead of text
    #[serde(default)]
    pub json: bool,

    /// Compute the placement transform for actions that carry one
    #[serde(default = "default_include_placement")]
    pub include_placement: bool,
}

fn default_include_placement() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            include_placement: default_include_placement(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// tracing-subscriber filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "cuestream=info,cuestream_format=info,cuestream_geometry=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
