//! Configuration management for the fieldcheck command line.
//!
//! Handles:
//! - Command-line argument parsing
//! - Config file discovery and loading
//! - Input selection (arguments, file or stdin)
//!
//! Loading priority: user config < project `.fieldcheck.toml` < `--config`
//! file < command-line flags. Only one file is read.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::report::OutputFormat;
use crate::validation::FieldKind;

/// Config file looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".fieldcheck.toml";

/// Command-line arguments for fieldcheck
#[derive(Debug, Parser)]
#[command(name = "fieldcheck")]
#[command(about = "Check usernames, phone numbers, emails, numbers and coordinates")]
#[command(version)]
pub struct Args {
    /// Values to check. Read from --file or stdin when omitted
    pub values: Vec<String>,

    /// Kind of field the values are checked as
    #[arg(short, long, value_enum)]
    pub kind: Option<FieldKind>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// File with one value per line ('-' for stdin)
    #[arg(short, long, conflicts_with = "values")]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the discovered one
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not read any config file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub kind: Option<FieldKind>,
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content, Some(path))
    }

    pub fn parse(content: &str, source_path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).with_context(|| match source_path {
            Some(path) => format!("Failed to parse config file {}", path.display()),
            None => "Failed to parse config".to_string(),
        })
    }
}

/// Where the values to check come from
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Values(Vec<String>),
    File(PathBuf),
    Stdin,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Field kind from the command line or config file
    pub kind: Option<FieldKind>,
    pub format: OutputFormat,
    pub input: Input,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from parsed command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = if args.no_config {
            None
        } else if let Some(path) = args.config.clone() {
            Some(path)
        } else {
            discover_config_file()
        };

        let file = match &config_path {
            Some(path) => {
                let file = ConfigFile::load(path)?;
                log::info!("Loaded config file {}", path.display());
                file
            }
            None => {
                log::debug!("No config file in use");
                ConfigFile::default()
            }
        };

        let input = match args.file {
            Some(path) if path.as_os_str() == "-" => Input::Stdin,
            Some(path) => Input::File(path),
            None if !args.values.is_empty() => Input::Values(args.values),
            None => Input::Stdin,
        };

        Ok(Config {
            kind: args.kind.or(file.kind),
            format: args.format.or(file.format).unwrap_or_default(),
            input,
            config_file: config_path,
        })
    }

    pub fn has_config_file(&self) -> bool {
        self.config_file.is_some()
    }

    /// Get the field kind to check with, failing when none is configured
    pub fn effective_kind(&self) -> Result<FieldKind> {
        self.kind.ok_or_else(|| {
            anyhow!(
                "No field kind given: pass --kind or set `kind` in {}",
                PROJECT_CONFIG_FILE
            )
        })
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("fieldcheck").join("config.toml");
    user.is_file().then_some(user)
}
