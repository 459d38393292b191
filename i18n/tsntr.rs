//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! tsntr - translate a plural message from a translation catalog
//!
//! The tsntr utility selects the numerus form of SOURCE in CONTEXT that
//! matches COUNT under the plural rule of the catalog's language,
//! replaces `%n` with the count and prints the result.

use clap::Parser;
use maep_i18n::ts_lib::catalog::TranslationCatalog;
use maep_i18n::ts_lib::lookup::{MessageLookup, DEFAULT_DOMAIN};
use maep_i18n::ts_lib::placeholder::substitute_count;
use maep_i18n::ts_lib::ts_file::TsFile;
use plib::io::{display_name, read_to_string};
use std::path::{Path, PathBuf};
use std::process::exit;

/// tsntr - translate a plural message from a translation catalog
#[derive(Parser)]
#[command(
    version,
    about = "tsntr - translate a plural message from a translation catalog",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'f', long = "file", help = "Read translations from this .ts file")]
    file: Option<PathBuf>,

    #[arg(short = 'D', action = clap::ArgAction::Append, help = "Add directory to the catalog search path")]
    directories: Vec<PathBuf>,

    #[arg(short = 'L', long = "locale", help = "Locale to translate into (default: LC_ALL, LC_MESSAGES, LANG)")]
    locale: Option<String>,

    #[arg(short = 'd', long = "domain", default_value = DEFAULT_DOMAIN, help = "Catalog basename")]
    domain: String,

    #[arg(short = 'm', long = "comment", help = "Disambiguation comment of the message")]
    comment: Option<String>,

    #[arg(short = 'n', help = "Suppress trailing newline")]
    no_newline: bool,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(help = "Context (screen or dialog) of the message")]
    context: String,

    #[arg(help = "Source text of the message, containing %n")]
    source: String,

    #[arg(help = "Count for plural selection")]
    count: String,
}

fn load_file(path: &Path) -> TranslationCatalog {
    let name = display_name(path);
    let parsed = read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| TsFile::parse(&text).map_err(|e| e.to_string()));

    match parsed {
        Ok(ts) => TranslationCatalog::from_ts_file(&ts),
        Err(e) => {
            eprintln!("tsntr: {}: {}", name, e);
            exit(1);
        }
    }
}

fn main() {
    plib::logging::init();

    let args = Args::parse();
    let comment = args.comment.as_deref();

    let count: u64 = match args.count.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("tsntr: invalid count: {}", args.count);
            exit(1);
        }
    };

    let (translated, format_locale) = match args.file {
        Some(ref path) => {
            let catalog = load_file(path);
            let locale = args
                .locale
                .clone()
                .unwrap_or_else(|| catalog.language.clone());
            let text = catalog
                .lookup_plural(&args.context, &args.source, comment, count)
                .map(str::to_string);
            (text, locale)
        }
        None => {
            let locale = args
                .locale
                .clone()
                .unwrap_or_else(MessageLookup::get_current_locale);

            let mut paths = args.directories.clone();
            paths.extend(MessageLookup::new().search_paths().iter().cloned());
            let mut lookup = MessageLookup::with_paths(paths).with_domain(&args.domain);

            let text = lookup
                .lookup_plural_in(&locale, &args.context, &args.source, comment, count)
                .map(str::to_string);
            (text, locale)
        }
    };

    let text = translated.unwrap_or_else(|| args.source.clone());
    print!("{}", substitute_count(&text, count, &format_locale));

    if !args.no_newline {
        println!();
    }
}
