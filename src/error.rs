// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for selector translation and namespace filtering
//!
//! Both components fail fast: the first invalid input aborts the whole call
//! and no partial result is returned. Nothing is retried internally.

use thiserror::Error;

/// A label selector failed validation during translation.
///
/// Each variant identifies which check failed so callers can report it
/// verbatim. Translation is atomic: any [`SelectorError`] means no output
/// was produced for any group.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// `matchLabels` was present but empty or null
    #[error("selector matchLabels is empty")]
    EmptyMatchLabels,

    /// A matchExpression had no `key`
    #[error("selector matchExpression is missing 'key'")]
    MissingKey,

    /// A matchExpression had no `operator`
    #[error("selector matchExpression is missing 'operator'")]
    MissingOperator,

    /// An In/NotIn matchExpression had a missing, null, or empty `values` list
    #[error("selector matchExpression is missing a non-empty 'values'")]
    MissingValues,

    /// The operator is not one of In, NotIn, Exists, DoesNotExist
    /// (compared case-insensitively). Carries the operator as supplied.
    #[error("selector matchExpression has invalid operator: {0}")]
    InvalidOperator(String),
}

/// A namespace access pattern is not a valid regular expression.
///
/// Carries the offending pattern's position in the input list and its raw
/// text, so the caller can point at the exact configuration entry.
#[derive(Debug, Error)]
#[error("invalid namespace pattern '{pattern}' at index {index}: {source}")]
pub struct PatternError {
    /// Zero-based position of the pattern in the input list
    pub index: usize,
    /// The pattern text as supplied, without the `^`/`$` anchoring
    pub pattern: String,
    /// The underlying regex compile error
    #[source]
    pub source: regex::Error,
}
