//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Error type for .ts catalog reading and writing
#[derive(Debug, Error)]
pub enum TsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] AttrError),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl TsError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        TsError::Parse {
            line,
            message: message.into(),
        }
    }
}
