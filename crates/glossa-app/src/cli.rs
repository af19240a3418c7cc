use std::path::PathBuf;

use clap::Parser;
use glossa_config::Config;

use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "glossa",
    version,
    about = "Look up word definitions, suggesting close matches for unknown words"
)]
pub struct Cli {
    /// Words to look up; reads one word per line from stdin when omitted
    pub words: Vec<String>,

    /// Dictionary JSON file, repeatable or comma separated (later files
    /// override earlier ones)
    #[arg(
        short = 'd',
        long = "dict",
        value_name = "PATH",
        env = "GLOSSA_DICT",
        value_delimiter = ','
    )]
    pub dicts: Vec<PathBuf>,

    /// Number of close matches the similarity search keeps
    #[arg(short = 'n', long, value_name = "N")]
    pub max_suggestions: Option<usize>,

    /// Minimum similarity ratio (0.0 - 1.0) for a suggestion
    #[arg(short = 'c', long, value_name = "RATIO")]
    pub cutoff: Option<f64>,

    /// Print every ranked suggestion instead of a single lookup result
    #[arg(long)]
    pub all: bool,

    /// Print results as JSON lines
    #[arg(long)]
    pub json: bool,

    /// JSON config profile; environment settings are used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Command line flags take precedence over profile and environment
    pub fn apply(&self, config: &mut Config) {
        if !self.dicts.is_empty() {
            config.dictionary.paths = self
                .dicts
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }
        if let Some(n) = self.max_suggestions {
            config.lookup.max_suggestions = n;
        }
        if let Some(cutoff) = self.cutoff {
            config.lookup.cutoff = cutoff;
        }
    }
}
