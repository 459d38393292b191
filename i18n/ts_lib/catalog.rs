//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Translation catalog for runtime message lookups
//!
//! This module provides the `TranslationCatalog` type which is the
//! runtime representation of a .ts catalog. Messages are keyed by
//! context, source text and disambiguation comment; entries that are
//! unfinished, obsolete or empty are left out so that lookups fall back
//! to the source text.

use std::collections::HashMap;

use crate::ts_lib::placeholder::substitute_count;
use crate::ts_lib::plural::PluralRule;
use crate::ts_lib::ts_file::TsFile;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    context: String,
    source: String,
    comment: String,
}

impl MessageKey {
    fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        MessageKey {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.unwrap_or("").to_string(),
        }
    }
}

/// Runtime message catalog for lookups
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    /// Target locale of the catalog, empty for the source language
    pub language: String,
    pub plural_rule: PluralRule,
    /// Singular translations
    messages: HashMap<MessageKey, String>,
    /// Numerus forms, in plural rule order
    plural_messages: HashMap<MessageKey, Vec<String>>,
}

impl TranslationCatalog {
    /// Create an empty catalog for a locale
    pub fn new(language: &str) -> Self {
        TranslationCatalog {
            language: language.to_string(),
            plural_rule: PluralRule::for_language(language),
            ..Default::default()
        }
    }

    /// Create a catalog from a parsed .ts file
    pub fn from_ts_file(ts: &TsFile) -> Self {
        let language = ts
            .language
            .as_deref()
            .or(ts.source_language.as_deref())
            .unwrap_or("");
        let mut catalog = TranslationCatalog::new(language);

        for (context, message) in ts.messages() {
            if !message.is_translated() {
                continue;
            }

            if message.numerus {
                catalog.add_plural_message(
                    context,
                    &message.source,
                    message.comment.as_deref(),
                    message.translations.clone(),
                );
            } else {
                catalog.add_message(
                    context,
                    &message.source,
                    message.comment.as_deref(),
                    message.translations[0].clone(),
                );
            }
        }

        catalog
    }

    /// Number of translated messages
    pub fn len(&self) -> usize {
        self.messages.len() + self.plural_messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a singular translation
    pub fn add_message(
        &mut self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        translation: String,
    ) {
        self.messages
            .insert(MessageKey::new(context, source, comment), translation);
    }

    /// Add the numerus forms of a plural translation
    pub fn add_plural_message(
        &mut self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        forms: Vec<String>,
    ) {
        self.plural_messages
            .insert(MessageKey::new(context, source, comment), forms);
    }

    /// Look up a singular message
    pub fn lookup(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&str> {
        self.messages
            .get(&MessageKey::new(context, source, comment))
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Look up the numerus form for count `n`
    pub fn lookup_plural(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: u64,
    ) -> Option<&str> {
        let forms = self
            .plural_messages
            .get(&MessageKey::new(context, source, comment))?;
        if forms.is_empty() {
            return None;
        }

        let index = self.plural_rule.form_index(n).min(forms.len() - 1);
        Some(forms[index].as_str()).filter(|s| !s.is_empty())
    }

    /// Translate a message, falling back to the source text
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source, None).unwrap_or(source)
    }

    /// Translate a plural message and substitute the count
    pub fn translate_plural(&self, context: &str, source: &str, n: u64) -> String {
        let text = self.lookup_plural(context, source, None, n).unwrap_or(source);
        substitute_count(text, n, &self.language)
    }
}
