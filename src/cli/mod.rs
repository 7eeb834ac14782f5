// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

mod args;

pub use args::{Args, Command, OutputFormat};
