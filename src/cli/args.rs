// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "k8sel")]
#[command(
    author,
    version,
    about = "Translate Kubernetes label selectors and filter accessible namespaces"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "lines", global = true)]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate label selector groups into selector expression strings
    ParseSelectors {
        /// Read the selector list (YAML or JSON) from a file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Filter namespaces against accessible-namespace regex patterns
    FilterNamespaces {
        /// Accessible-namespace pattern, anchored to the full name.
        /// Repeatable. Falls back to the saved config when omitted.
        #[arg(short, long = "pattern", value_name = "REGEX")]
        patterns: Vec<String>,

        /// Namespaces to filter; read from stdin (one per line) when omitted
        namespaces: Vec<String>,
    },

    /// Show or replace the saved accessible-namespace patterns
    Patterns {
        /// Replace the saved pattern list (pass no values to clear it)
        #[arg(long, value_name = "REGEX", num_args = 0..)]
        set: Option<Vec<String>>,
    },
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text, one result per line
    #[default]
    Lines,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}
