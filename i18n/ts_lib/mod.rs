//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Translation catalog library
//!
//! This module provides functionality for reading and writing Qt Linguist
//! .ts catalogs, selecting plural forms, handling `%` placeholders, and
//! looking up messages in the catalog for the current locale.

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod placeholder;
pub mod plural;
pub mod ts_file;
pub mod validate;

pub use error::TsError;
