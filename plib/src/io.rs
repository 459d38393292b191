//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Open a catalog for reading; "-" selects stdin.
pub fn input_stream(pathname: &Path) -> io::Result<Box<dyn Read>> {
    let file: Box<dyn Read> = if pathname.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(fs::File::open(pathname)?)
    };

    Ok(file)
}

/// Read a whole catalog into memory; "-" selects stdin.
pub fn read_to_string(pathname: &Path) -> io::Result<String> {
    let mut input = input_stream(pathname)?;
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text)
}

/// Name used for a path in diagnostics
pub fn display_name(pathname: &Path) -> String {
    if pathname.as_os_str() == "-" {
        String::from("<stdin>")
    } else {
        pathname.display().to_string()
    }
}
