//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! tslint - check translation catalogs for consistency
//!
//! The tslint utility reads Qt Linguist .ts catalogs and reports
//! placeholder mismatches, wrong numerus form counts and duplicate
//! messages.

use clap::Parser;
use maep_i18n::ts_lib::ts_file::TsFile;
use maep_i18n::ts_lib::validate::{check_catalog, CheckOptions};
use plib::io::{display_name, read_to_string};
use std::path::{Path, PathBuf};
use std::process::exit;

/// tslint - check translation catalogs for consistency
#[derive(Parser)]
#[command(
    version,
    about = "tslint - check translation catalogs for consistency",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 's', long = "strict", help = "Treat reordered placeholders as errors")]
    strict: bool,

    #[arg(short = 'v', help = "Verbose mode - print warnings")]
    verbose: bool,

    #[arg(long = "statistics", help = "Print message counts for each catalog")]
    statistics: bool,

    #[arg(short = 'D', action = clap::ArgAction::Append, help = "Add directory to search path for input files")]
    directories: Vec<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(required = true, help = "Input .ts files, - for stdin")]
    files: Vec<PathBuf>,
}

fn main() {
    plib::logging::init();

    let args = Args::parse();
    let options = CheckOptions {
        strict: args.strict,
    };

    let mut exit_code = 0;

    for input_path in &args.files {
        let path = find_input_file(input_path, &args.directories);
        let name = display_name(&path);

        let text = match read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("tslint: {}: {}", name, e);
                exit_code = 1;
                continue;
            }
        };

        let ts = match TsFile::parse(&text) {
            Ok(ts) => ts,
            Err(e) => {
                eprintln!("tslint: {}: {}", name, e);
                exit_code = 1;
                continue;
            }
        };

        for diag in check_catalog(&ts, &options) {
            if diag.is_error() {
                exit_code = 1;
            }
            if diag.is_error() || args.verbose {
                eprintln!("{}:{}", name, diag);
            }
        }

        if args.statistics {
            let stats = ts.statistics();
            eprintln!(
                "{}: {} finished, {} unfinished, {} obsolete messages.",
                name, stats.finished, stats.unfinished, stats.obsolete
            );
        }
    }

    exit(exit_code);
}

/// Find an input file, searching directories if needed
fn find_input_file(path: &Path, directories: &[PathBuf]) -> PathBuf {
    if path.as_os_str() == "-" || path.exists() {
        return path.to_path_buf();
    }

    for dir in directories {
        let full_path = dir.join(path);
        if full_path.exists() {
            return full_path;
        }
    }

    path.to_path_buf()
}
