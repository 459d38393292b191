//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Locale plural rules
//!
//! A numerus message carries one `<numerusform>` per plural category of
//! the target language. The rule maps a count to the index of the form
//! to use; the number of forms a catalog must provide follows from the
//! rule as well.
//!
//! Examples:
//! - Chinese: one invariant form
//! - Spanish, Swedish: singular when n=1, plural otherwise
//! - French: singular for 0 and 1
//! - Russian: `n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2`

/// Plural rule families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralRule {
    /// No plural distinction
    Invariant,
    /// `n != 1`
    #[default]
    OneOther,
    /// `n > 1`
    ZeroOneOther,
    /// Russian, Ukrainian, Belarusian and the Serbo-Croatian languages
    EastSlavic,
    Polish,
    CzechSlovak,
}

const INVARIANT: &[&str] = &["id", "ja", "km", "ko", "lo", "ms", "my", "th", "vi", "zh"];
const ZERO_ONE_OTHER: &[&str] = &["br", "fr", "ln", "oc"];
const EAST_SLAVIC: &[&str] = &["be", "bs", "hr", "ru", "sr", "uk"];
const CZECH_SLOVAK: &[&str] = &["cs", "sk"];

impl PluralRule {
    /// Rule for a locale name such as `fr_FR`, `zh-CN` or `es.UTF-8`
    ///
    /// Unknown languages get the Germanic `n != 1` rule.
    pub fn for_language(locale: &str) -> Self {
        let language = language_code(locale);

        if INVARIANT.contains(&language.as_str()) {
            PluralRule::Invariant
        } else if ZERO_ONE_OTHER.contains(&language.as_str()) {
            PluralRule::ZeroOneOther
        } else if EAST_SLAVIC.contains(&language.as_str()) {
            PluralRule::EastSlavic
        } else if CZECH_SLOVAK.contains(&language.as_str()) {
            PluralRule::CzechSlovak
        } else if language == "pl" {
            PluralRule::Polish
        } else {
            PluralRule::OneOther
        }
    }

    /// Number of numerus forms a catalog for this rule carries
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Invariant => 1,
            PluralRule::OneOther | PluralRule::ZeroOneOther => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::CzechSlovak => 3,
        }
    }

    /// Index of the numerus form to use for count `n`
    pub fn form_index(&self, n: u64) -> usize {
        match self {
            PluralRule::Invariant => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}

/// Lowercase language part of a locale name: `zh-CN.UTF-8@x` -> `zh`
pub fn language_code(locale: &str) -> String {
    locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}
