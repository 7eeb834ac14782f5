// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Output formatting for CLI results

use crate::cli::OutputFormat;

/// Format translated selector expression lists.
///
/// `lines` joins each group's expressions with `,` (the conjunction a
/// selector-matching API expects) and prints one group per line, so each
/// line is a ready-to-use label selector string.
pub fn format_expressions(groups: &[Vec<String>], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Lines => groups
            .iter()
            .map(|group| group.join(","))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(groups).unwrap_or_else(|_| "[]".to_string())
        }
        OutputFormat::Yaml => serde_yaml::to_string(groups).unwrap_or_else(|_| "[]".to_string()),
    }
}

/// Format a filtered namespace list.
pub fn format_namespaces(namespaces: &[String], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Lines => namespaces.join("\n"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(namespaces).unwrap_or_else(|_| "[]".to_string())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(namespaces).unwrap_or_else(|_| "[]".to_string())
        }
    }
}
