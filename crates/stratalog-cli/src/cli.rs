//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stratalog_core::config::ConfigLoader;
use stratalog_types::{LogConfig, Severity};

#[derive(Parser)]
#[command(name = "stratalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Component-scoped leveled logging", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log file; log lines go to stderr when unset
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Level spec, e.g. "WARNING,net=INFO,net/tcp=DEBUG"
    #[arg(long, global = true)]
    pub loglevel: Option<String>,

    /// YAML file with `loglevel` and `logfile` keys
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the level spec and print the resulting table
    Check,

    /// Print the effective level of each component
    Resolve {
        /// Component names, e.g. "net/tcp/handshake"
        #[arg(required = true)]
        components: Vec<String>,
    },

    /// Emit one log line through a component logger
    Emit {
        /// Component name
        #[arg(short, long)]
        component: String,

        /// Severity: FATAL, SEVERE, WARNING, INFO or DEBUG
        #[arg(short, long, default_value = "INFO")]
        severity: Severity,

        /// Message words
        #[arg(required = true)]
        message: Vec<String>,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Check => check::execute(&self.log_config()?),
            Commands::Resolve { components } => resolve::execute(&self.log_config()?, components),
            Commands::Emit {
                component,
                severity,
                message,
            } => emit::execute(&self.log_config()?, component, *severity, &message.join(" ")),
        }
    }

    /// Resolve flags, environment and config file into one configuration.
    fn log_config(&self) -> Result<LogConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_file(path);
        }
        if let Some(loglevel) = &self.loglevel {
            loader = loader.with_loglevel(loglevel.clone());
        }
        if let Some(logfile) = &self.logfile {
            loader = loader.with_logfile(logfile.clone());
        }
        loader.load().context("Failed to load logging configuration")
    }
}
