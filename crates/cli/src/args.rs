// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments and how they resolve into a source and a config.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use jsr_engine::{ConfigError, RunConfig};

use crate::output::OutputFormat;
use crate::snippets::Snippet;

/// Run JavaScript and print its console output in call order.
#[derive(Debug, Parser)]
#[command(name = "jsr", version, styles = crate::color::styles())]
pub struct Cli {
    /// Script to run; `-` or nothing reads stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Run CODE instead of reading a file
    #[arg(short, long, value_name = "CODE", conflicts_with_all = ["file", "example"])]
    pub eval: Option<String>,

    /// Run a built-in example
    #[arg(long, value_enum, value_name = "NAME", conflicts_with = "file")]
    pub example: Option<Snippet>,

    /// TOML file with `grace_ms` / `timeout_ms`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How long to keep collecting deferred output after the script returns
    #[arg(long, value_name = "MS")]
    pub grace_ms: Option<u64>,

    /// Fail runs whose body has not settled after MS (0 disables)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Where the script text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Inline(String),
    Example(Snippet),
    File(PathBuf),
    Stdin,
}

impl Cli {
    pub fn source(&self) -> Source {
        if let Some(code) = &self.eval {
            return Source::Inline(code.clone());
        }
        if let Some(snippet) = self.example {
            return Source::Example(snippet);
        }
        match &self.file {
            Some(path) if path != Path::new("-") => Source::File(path.clone()),
            _ => Source::Stdin,
        }
    }

    /// Config file, then environment, then flags.
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        let mut config = base.with_env();
        if let Some(ms) = self.grace_ms {
            config = config.grace_period(Duration::from_millis(ms));
        }
        if let Some(ms) = self.timeout_ms {
            config.run_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }
        Ok(config)
    }
}

impl Source {
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Source::Inline(code) => Ok(code.clone()),
            Source::Example(snippet) => Ok(snippet.source().to_string()),
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
                Ok(text)
            }
        }
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
