//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! `%` placeholder markers in source and translation strings
//!
//! - `%1` .. `%99`: positional arguments
//! - `%L1` .. `%L99`: positional arguments formatted for the locale
//! - `%n`: the plural count
//! - `%Ln`: the plural count formatted for the locale
//!
//! Tools that rewrite catalogs must keep every marker of the source in
//! the translation.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ts_lib::plural::language_code;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(L?)(n|[1-9][0-9]?)").expect("valid placeholder regex"));

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)([0-9]+)(?:\.([0-9]+))?$").expect("valid number regex"));

/// Result of comparing the markers of a source and a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderMatch {
    /// Same markers in the same order
    Same,
    /// Same markers, different order
    Reordered,
    /// Markers missing from or added to the translation
    Mismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// Markers of `text` in order of appearance
pub fn placeholders(text: &str) -> Vec<&str> {
    MARKER.find_iter(text).map(|m| m.as_str()).collect()
}

/// Compare the markers of a translation against its source
pub fn compare(source: &str, translation: &str) -> PlaceholderMatch {
    let expected = placeholders(source);
    let found = placeholders(translation);

    if expected == found {
        return PlaceholderMatch::Same;
    }

    let mut missing: Vec<String> = Vec::new();
    let mut leftover = found.clone();
    for marker in &expected {
        match leftover.iter().position(|m| m == marker) {
            Some(pos) => {
                leftover.remove(pos);
            }
            None => missing.push(marker.to_string()),
        }
    }

    if missing.is_empty() && leftover.is_empty() {
        PlaceholderMatch::Reordered
    } else {
        PlaceholderMatch::Mismatch {
            missing,
            unexpected: leftover.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Digit grouping and decimal separator of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group: char,
    pub decimal: char,
}

impl NumberFormat {
    pub fn for_language(locale: &str) -> Self {
        match language_code(locale).as_str() {
            "es" | "de" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" => NumberFormat {
                group: '.',
                decimal: ',',
            },
            "fr" | "sv" | "nb" | "nn" | "no" | "fi" | "ru" | "uk" | "pl" | "cs" | "sk" => {
                NumberFormat {
                    group: '\u{a0}',
                    decimal: ',',
                }
            }
            _ => NumberFormat {
                group: ',',
                decimal: '.',
            },
        }
    }

    /// Format a plain decimal number (`-1234.5`); other input is
    /// returned unchanged
    pub fn format(&self, value: &str) -> String {
        let Some(caps) = NUMBER.captures(value) else {
            return value.to_string();
        };

        let mut out = String::from(&caps[1]);
        let digits = &caps[2];
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.group);
            }
            out.push(digit);
        }
        if let Some(fraction) = caps.get(3) {
            out.push(self.decimal);
            out.push_str(fraction.as_str());
        }

        out
    }
}

/// Replace `%n` and `%Ln` with the plural count
pub fn substitute_count(text: &str, n: u64, locale: &str) -> String {
    let plain = n.to_string();
    let localized = NumberFormat::for_language(locale).format(&plain);

    MARKER
        .replace_all(text, |caps: &Captures| match (&caps[1], &caps[2]) {
            ("", "n") => plain.clone(),
            ("L", "n") => localized.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Replace `%1`, `%2`, ... with `args[0]`, `args[1]`, ...
///
/// `%L` markers get locale number formatting when the argument is a
/// number. Markers without a matching argument stay as they are.
pub fn substitute_args<S: AsRef<str>>(text: &str, args: &[S], locale: &str) -> String {
    let format = NumberFormat::for_language(locale);

    MARKER
        .replace_all(text, |caps: &Captures| {
            let index = match caps[2].parse::<usize>() {
                Ok(index) => index,
                Err(_) => return caps[0].to_string(),
            };
            match args.get(index - 1) {
                Some(arg) if &caps[1] == "L" => format.format(arg.as_ref()),
                Some(arg) => arg.as_ref().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
