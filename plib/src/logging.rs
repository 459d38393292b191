//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Logging setup shared by the utilities
//!
//! Events go to stderr without timestamps or colors so they interleave
//! cleanly with regular diagnostics. The filter comes from `MAEP_LOG`
//! (same syntax as `RUST_LOG`) and defaults to `warn`.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

pub const LOG_VAR: &str = "MAEP_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
