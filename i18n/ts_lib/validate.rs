//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Catalog consistency checks
//!
//! - every translation carries the placeholder markers of its source
//! - numerus messages provide one form per plural category of the locale
//! - source strings are unique within a context

use std::collections::HashSet;
use std::fmt;

use crate::ts_lib::placeholder::{compare, placeholders, PlaceholderMatch};
use crate::ts_lib::plural::PluralRule;
use crate::ts_lib::ts_file::{TranslationStatus, TsContext, TsFile, TsMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Problem found in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub severity: Severity,
    pub context: String,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: ", self.line, self.severity)?;
        if !self.context.is_empty() {
            write!(f, "{}: ", self.context)?;
        }
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Treat reordered placeholders as errors
    pub strict: bool,
}

/// Plural rule a catalog is checked against
///
/// Templates without a `language` fall back to the source language,
/// then to English.
pub fn catalog_plural_rule(ts: &TsFile) -> PluralRule {
    let language = ts
        .language
        .as_deref()
        .or(ts.source_language.as_deref())
        .unwrap_or("en");
    PluralRule::for_language(language)
}

struct Checker<'a> {
    options: &'a CheckOptions,
    rule: PluralRule,
    language: String,
    diagnostics: Vec<Diagnostic>,
}

impl Checker<'_> {
    fn report(&mut self, line: usize, severity: Severity, context: &str, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            severity,
            context: context.to_string(),
            message,
        });
    }

    fn check_context(&mut self, context: &TsContext) {
        if context.name.is_empty() {
            self.report(
                context.line,
                Severity::Error,
                "",
                "context without a name".to_string(),
            );
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for message in &context.messages {
            if message.status.is_obsolete() {
                continue;
            }

            let key = (
                message.source.as_str(),
                message.comment.as_deref().unwrap_or(""),
            );
            if !seen.insert(key) {
                let what = match message.comment {
                    Some(ref comment) => format!(
                        "duplicate message \"{}\" (comment \"{}\")",
                        truncate(&message.source, 40),
                        truncate(comment, 20)
                    ),
                    None => format!("duplicate message \"{}\"", truncate(&message.source, 40)),
                };
                self.report(message.line, Severity::Error, &context.name, what);
            }

            self.check_message(&context.name, message);
        }
    }

    fn check_message(&mut self, context: &str, message: &TsMessage) {
        let source = truncate(&message.source, 40);

        if message.numerus {
            if placeholders(&message.source).iter().all(|m| !m.ends_with('n')) {
                self.report(
                    message.line,
                    Severity::Warning,
                    context,
                    format!("numerus message \"{}\" has no %n marker", source),
                );
            }

            let forms = message.translations.len();
            let finished = message.status == TranslationStatus::Finished;
            if (forms > 0 || finished) && forms != self.rule.form_count() {
                self.report(
                    message.line,
                    Severity::Error,
                    context,
                    format!(
                        "\"{}\" has {} numerus form(s), language \"{}\" needs {}",
                        source,
                        forms,
                        self.language,
                        self.rule.form_count()
                    ),
                );
            }
        }

        if message.status == TranslationStatus::Finished
            && message.translations.iter().all(|t| t.is_empty())
        {
            self.report(
                message.line,
                Severity::Warning,
                context,
                format!("empty translation of \"{}\" not marked unfinished", source),
            );
        }

        let several = message.translations.len() > 1;
        for (i, translation) in message.translations.iter().enumerate() {
            if translation.is_empty() {
                continue;
            }

            let which = if several {
                format!("numerus form {} of", i + 1)
            } else {
                String::from("translation of")
            };

            match compare(&message.source, translation) {
                PlaceholderMatch::Same => {}
                PlaceholderMatch::Reordered => {
                    let severity = if self.options.strict {
                        Severity::Error
                    } else {
                        Severity::Warning
                    };
                    self.report(
                        message.line,
                        severity,
                        context,
                        format!("placeholders reordered in {} \"{}\"", which, source),
                    );
                }
                PlaceholderMatch::Mismatch {
                    missing,
                    unexpected,
                } => {
                    let mut detail = Vec::new();
                    if !missing.is_empty() {
                        detail.push(format!("missing {}", missing.join(" ")));
                    }
                    if !unexpected.is_empty() {
                        detail.push(format!("unexpected {}", unexpected.join(" ")));
                    }
                    self.report(
                        message.line,
                        Severity::Error,
                        context,
                        format!(
                            "placeholders differ in {} \"{}\": {}",
                            which,
                            source,
                            detail.join(", ")
                        ),
                    );
                }
            }
        }
    }
}

/// Run all checks over a catalog
pub fn check_catalog(ts: &TsFile, options: &CheckOptions) -> Vec<Diagnostic> {
    let mut checker = Checker {
        options,
        rule: catalog_plural_rule(ts),
        language: ts
            .language
            .clone()
            .or_else(|| ts.source_language.clone())
            .unwrap_or_else(|| "en".to_string()),
        diagnostics: Vec::new(),
    };

    for context in &ts.contexts {
        checker.check_context(context);
    }

    checker.diagnostics
}

/// Truncate a string for display
fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
