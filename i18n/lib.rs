//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! maep-i18n library
//!
//! This library provides the translation catalog support for Mæp:
//! - ts_file: Qt Linguist .ts parsing and serialization
//! - catalog/lookup: runtime message lookup with locale resolution
//! - validate: consistency checks used by tslint

pub mod ts_lib;
