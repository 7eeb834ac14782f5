// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

mod cli;
mod output;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::{Args, Command, OutputFormat};
use k8sel::config::Config;
use k8sel::selector::SelectorGroup;
use k8sel::{namespace, selector};

/// Initialize logging to stderr, keeping stdout machine-consumable
fn init_logging(verbose: bool) {
    let filter = if verbose { "k8sel=debug" } else { "k8sel=info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::ParseSelectors { ref file } => run_parse_selectors(file.as_deref(), &args.output),
        Command::FilterNamespaces {
            patterns,
            namespaces,
        } => run_filter_namespaces(patterns, namespaces, &args.output),
        Command::Patterns { set } => run_patterns(set),
    }
}

/// Read from a file when given, stdin otherwise
fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn run_parse_selectors(file: Option<&str>, format: &OutputFormat) -> Result<()> {
    let input = read_input(file)?;
    let groups: Vec<SelectorGroup> =
        serde_yaml::from_str(&input).context("Failed to parse selector list")?;
    debug!(groups = groups.len(), "translating selector groups");

    let expressions = selector::translate(&groups)?;
    println!("{}", output::format_expressions(&expressions, format));
    Ok(())
}

fn run_filter_namespaces(
    patterns: Vec<String>,
    namespaces: Vec<String>,
    format: &OutputFormat,
) -> Result<()> {
    let patterns = if patterns.is_empty() {
        let config = Config::load()?;
        debug!(
            patterns = config.accessible_patterns.len(),
            "no --pattern given, using saved accessible patterns"
        );
        config.accessible_patterns
    } else {
        patterns
    };

    let namespaces = if namespaces.is_empty() {
        read_input(None)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    } else {
        namespaces
    };

    let accessible = namespace::filter(&namespaces, &patterns)?;
    debug!(
        kept = accessible.len(),
        total = namespaces.len(),
        "filtered namespaces"
    );
    println!("{}", output::format_namespaces(&accessible, format));
    Ok(())
}

fn run_patterns(set: Option<Vec<String>>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(patterns) = set {
        // Reject invalid regexes before persisting them
        namespace::filter(&[], &patterns)?;
        config.set_accessible_patterns(patterns)?;
    }

    for pattern in &config.accessible_patterns {
        println!("{}", pattern);
    }
    Ok(())
}
