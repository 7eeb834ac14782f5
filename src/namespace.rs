// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Accessible-namespace filtering
//!
//! Given the full list of known namespaces and a list of access patterns
//! (regular expressions), keeps only the namespaces that match at least one
//! pattern. Patterns are anchored to the whole name (`^pattern$`), so
//! `"tes"` does not match `"test"`.
//!
//! Each pattern is compiled exactly once per call and reused across every
//! candidate namespace: N patterns against M namespaces costs O(N)
//! compilations and at most O(N·M) match evaluations.

use regex::Regex;

use crate::error::PatternError;

/// Filter `namespaces` down to those matching at least one access pattern.
///
/// The result is an order-preserving subsequence of `namespaces`; duplicate
/// input entries are kept as duplicates. A namespace is emitted at most once
/// per occurrence even when several patterns match it (the first matching
/// pattern wins and the rest are skipped). An empty pattern list means
/// nothing is accessible.
///
/// Fails with [`PatternError`] on the first pattern that is not a valid
/// regular expression.
pub fn filter(namespaces: &[String], patterns: &[String]) -> Result<Vec<String>, PatternError> {
    let compiled = compile_patterns(patterns)?;

    let accessible = namespaces
        .iter()
        .filter(|namespace| compiled.iter().any(|re| re.is_match(namespace)))
        .cloned()
        .collect();

    Ok(accessible)
}

/// Compile each pattern once, anchored to a full-string match.
fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, PatternError> {
    patterns
        .iter()
        .enumerate()
        .map(|(index, pattern)| {
            Regex::new(&format!("^{}$", pattern)).map_err(|source| PatternError {
                index,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
