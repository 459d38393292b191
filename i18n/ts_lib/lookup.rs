//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Catalog lookup with locale resolution
//!
//! This module provides functionality for finding and loading the .ts
//! catalog that matches the current locale, the way the application
//! picks its translation at startup or on a locale switch.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ts_lib::catalog::TranslationCatalog;
use crate::ts_lib::ts_file::TsFile;

/// Basename of the application's catalogs
pub const DEFAULT_DOMAIN: &str = "harbour-maep-qt";

/// Environment variable naming a translations directory searched first
pub const TRANSLATIONS_VAR: &str = "MAEP_TRANSLATIONS";

/// Default catalog search paths
const DEFAULT_TRANSLATION_PATHS: &[&str] = &[
    "/usr/share/harbour-maep-qt/translations",
    "/usr/local/share/harbour-maep-qt/translations",
];

/// Catalog lookup service
#[derive(Debug)]
pub struct MessageLookup {
    /// Search paths, in priority order
    search_paths: Vec<PathBuf>,
    /// Catalog basename
    domain: String,
    /// Cached catalogs by locale; `None` records a failed search
    catalogs: HashMap<String, Option<TranslationCatalog>>,
}

impl MessageLookup {
    /// Create a lookup service using `MAEP_TRANSLATIONS` and the default paths
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        if let Ok(dir) = env::var(TRANSLATIONS_VAR) {
            if !dir.is_empty() {
                search_paths.push(PathBuf::from(dir));
            }
        }

        for path in DEFAULT_TRANSLATION_PATHS {
            search_paths.push(PathBuf::from(path));
        }

        Self::with_paths(search_paths)
    }

    /// Create a lookup service with custom search paths
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        MessageLookup {
            search_paths: paths,
            domain: DEFAULT_DOMAIN.to_string(),
            catalogs: HashMap::new(),
        }
    }

    /// Use a different catalog basename
    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self.catalogs.clear();
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Get the current locale from environment
    pub fn get_current_locale() -> String {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(locale) = env::var(var) {
                if !locale.is_empty() {
                    return locale;
                }
            }
        }

        "C".to_string()
    }

    /// Get locale variants for fallback lookup
    ///
    /// For "fr_FR.UTF-8@euro", returns "fr_FR", "fr". "zh-CN" is
    /// normalized to "zh_CN". The C and POSIX locales have no variants.
    pub fn get_locale_variants(locale: &str) -> Vec<String> {
        let base = locale.split(['.', '@']).next().unwrap_or("").replace('-', "_");

        if base.is_empty() || base == "C" || base == "POSIX" {
            return Vec::new();
        }

        let mut variants = vec![base.clone()];
        if let Some((language, _territory)) = base.split_once('_') {
            if !language.is_empty() {
                variants.push(language.to_string());
            }
        }

        variants
    }

    /// Candidate file names for one locale variant
    fn file_names(&self, variant: &str) -> [String; 3] {
        [
            format!("{}-{}.ts", self.domain, variant),
            format!("{}_{}.ts", self.domain, variant),
            format!("{}.ts", variant),
        ]
    }

    /// Find the .ts file for a locale
    pub fn find_catalog_file(&self, locale: &str) -> Option<PathBuf> {
        let variants = Self::get_locale_variants(locale);

        for variant in &variants {
            for base_path in &self.search_paths {
                for name in self.file_names(variant) {
                    let path = base_path.join(name);
                    debug!(path = %path.display(), "trying catalog");
                    if path.is_file() {
                        return Some(path);
                    }
                }
            }
        }

        None
    }

    fn read_catalog(path: &Path) -> Option<TranslationCatalog> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                return None;
            }
        };

        match TsFile::parse(&text) {
            Ok(ts) => {
                let catalog = TranslationCatalog::from_ts_file(&ts);
                debug!(
                    path = %path.display(),
                    messages = catalog.len(),
                    "loaded catalog"
                );
                Some(catalog)
            }
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                None
            }
        }
    }

    /// Load the catalog for a locale, caching the result
    pub fn load_catalog(&mut self, locale: &str) -> Option<&TranslationCatalog> {
        if !self.catalogs.contains_key(locale) {
            let catalog = self
                .find_catalog_file(locale)
                .and_then(|path| Self::read_catalog(&path));
            self.catalogs.insert(locale.to_string(), catalog);
        }

        self.catalogs.get(locale).and_then(Option::as_ref)
    }

    /// Look up a message for the current locale
    pub fn lookup(&mut self, context: &str, source: &str, comment: Option<&str>) -> Option<&str> {
        let locale = Self::get_current_locale();
        self.lookup_in(&locale, context, source, comment)
    }

    /// Look up a message for an explicit locale
    pub fn lookup_in(
        &mut self,
        locale: &str,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Option<&str> {
        self.load_catalog(locale)?.lookup(context, source, comment)
    }

    /// Look up a plural message for an explicit locale
    pub fn lookup_plural_in(
        &mut self,
        locale: &str,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: u64,
    ) -> Option<&str> {
        self.load_catalog(locale)?
            .lookup_plural(context, source, comment, n)
    }
}

impl Default for MessageLookup {
    fn default() -> Self {
        Self::new()
    }
}
