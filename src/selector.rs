// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Kubernetes label selector translation
//!
//! Converts a list of label selector groups (the standard `matchLabels` /
//! `matchExpressions` shape) into the textual selector expression format
//! consumed by selector-matching APIs.
//!
//! The two-level output mirrors the OR-of-ANDs semantics of the selector
//! model: the outer list is a logical OR across groups, each inner list is
//! the logical AND of that group's constraints. A consumer joins an inner
//! list with `,` and issues one query per outer entry, unioning the results.
//!
//! Example: given
//!
//! ```yaml
//! - matchLabels:
//!     foo: bar
//! - matchLabels:
//!     color: blue
//!   matchExpressions:
//!   - key: region
//!     operator: In
//!     values: [east, west]
//! ```
//!
//! the result is `[["foo=bar"], ["color=blue", "region in (east,west)"]]`.
//!
//! See https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/#label-selectors

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SelectorError;

/// One element of a selector list. Sibling groups are OR'ed together.
///
/// `match_labels` uses an [`IndexMap`] so that insertion order (the order in
/// the source document) is preserved in the translated output; an unordered
/// map would make translation nondeterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorGroup {
    /// Equality constraints: each entry becomes `key=value`
    #[serde(
        default,
        deserialize_with = "null_as_empty_labels",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_labels: Option<IndexMap<String, String>>,

    /// Set-based constraints, rendered in input order after the labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<MatchExpression>>,
}

/// A set-based selector requirement.
///
/// `key` and `operator` are optional here so that a document missing them
/// still deserializes; [`translate`] rejects them with a precise error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchExpression {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// One of In, NotIn, Exists, DoesNotExist (case-insensitive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// Required non-empty for In/NotIn, ignored otherwise
    #[serde(
        default,
        deserialize_with = "null_as_empty_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub values: Option<Vec<String>>,
}

/// Treat an explicit `matchLabels: null` as present-and-empty rather than
/// absent, so it fails the emptiness check the same way `matchLabels: {}`
/// does. Only invoked when the field is present in the document.
fn null_as_empty_labels<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IndexMap<String, String>>::deserialize(deserializer)?;
    Ok(Some(value.unwrap_or_default()))
}

/// Same null handling for `values`: `values: null` counts as empty.
fn null_as_empty_values<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(Some(value.unwrap_or_default()))
}

/// Translate selector groups into lists of selector expression strings.
///
/// Each input group contributes exactly one inner list at the same index,
/// even when the group is empty; groups are never merged. Translation is
/// all-or-nothing: the first invalid group aborts the call and nothing is
/// returned for the groups that preceded it.
pub fn translate(groups: &[SelectorGroup]) -> Result<Vec<Vec<String>>, SelectorError> {
    let mut result = Vec::with_capacity(groups.len());

    for group in groups {
        let mut expressions = Vec::new();

        if let Some(labels) = &group.match_labels {
            if labels.is_empty() {
                return Err(SelectorError::EmptyMatchLabels);
            }
            for (key, value) in labels {
                expressions.push(format!("{}={}", key, value));
            }
        }

        if let Some(match_expressions) = &group.match_expressions {
            for expr in match_expressions {
                expressions.push(render_expression(expr)?);
            }
        }

        result.push(expressions);
    }

    Ok(result)
}

/// Render a single matchExpression into its textual form.
fn render_expression(expr: &MatchExpression) -> Result<String, SelectorError> {
    let key = match &expr.key {
        Some(key) if !key.is_empty() => key,
        _ => return Err(SelectorError::MissingKey),
    };
    let operator = expr
        .operator
        .as_deref()
        .ok_or(SelectorError::MissingOperator)?;

    // The operator is matched case-insensitively; the original casing only
    // survives in the InvalidOperator error message.
    match operator.to_lowercase().as_str() {
        op @ ("in" | "notin") => {
            let values = match &expr.values {
                Some(values) if !values.is_empty() => values,
                _ => return Err(SelectorError::MissingValues),
            };
            Ok(format!("{} {} ({})", key, op, values.join(",")))
        }
        "exists" => Ok(key.clone()),
        "doesnotexist" => Ok(format!("!{}", key)),
        _ => Err(SelectorError::InvalidOperator(operator.to_string())),
    }
}
