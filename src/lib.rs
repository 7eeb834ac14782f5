// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Kubernetes label selector translation and accessible-namespace filtering.
//!
//! Two independent, stateless utilities:
//!
//! - [`selector::translate`] converts label selector groups (`matchLabels` /
//!   `matchExpressions`) into OR-combined lists of selector expression
//!   strings.
//! - [`namespace::filter`] keeps only the namespaces matching at least one
//!   accessible-namespace regex, anchored to the full name.
//!
//! ```
//! use k8sel::selector::{self, SelectorGroup};
//!
//! let groups: Vec<SelectorGroup> =
//!     serde_yaml::from_str("- matchLabels:\n    app: nginx\n").unwrap();
//! let expressions = selector::translate(&groups).unwrap();
//! assert_eq!(expressions, vec![vec!["app=nginx".to_string()]]);
//! ```
//!
//! ```
//! use k8sel::namespace;
//!
//! let namespaces = vec!["istio-system".to_string(), "default".to_string()];
//! let patterns = vec!["istio-.*".to_string()];
//! let accessible = namespace::filter(&namespaces, &patterns).unwrap();
//! assert_eq!(accessible, vec!["istio-system".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod namespace;
pub mod selector;

pub use error::{PatternError, SelectorError};
