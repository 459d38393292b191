//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! tsfmt - rewrite a translation catalog in canonical form
//!
//! The tsfmt utility parses a .ts catalog and writes it back in the
//! layout lupdate produces, keeping every message, translation status,
//! numerus form and placeholder.

use clap::Parser;
use maep_i18n::ts_lib::ts_file::TsFile;
use maep_i18n::ts_lib::TsError;
use plib::io::{display_name, read_to_string};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

/// tsfmt - rewrite a translation catalog in canonical form
#[derive(Parser)]
#[command(
    version,
    about = "tsfmt - rewrite a translation catalog in canonical form",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'o', long = "output-file", help = "Output file name (default: stdout)")]
    output: Option<PathBuf>,

    #[arg(long = "drop-obsolete", help = "Remove obsolete and vanished messages")]
    drop_obsolete: bool,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(help = "Input .ts file, - for stdin")]
    file: PathBuf,
}

fn write_output(ts: &TsFile, output: &Option<PathBuf>) -> Result<(), TsError> {
    match output {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            ts.write_to(&mut w)?;
            w.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            ts.write_to(&mut w)?;
            w.flush()?;
        }
    }
    Ok(())
}

fn main() {
    plib::logging::init();

    let args = Args::parse();
    let name = display_name(&args.file);

    let text = match read_to_string(&args.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("tsfmt: {}: {}", name, e);
            exit(1);
        }
    };

    let mut ts = match TsFile::parse(&text) {
        Ok(ts) => ts,
        Err(e) => {
            eprintln!("tsfmt: {}: {}", name, e);
            exit(1);
        }
    };

    if args.drop_obsolete {
        ts.drop_obsolete();
    }

    if let Err(e) = write_output(&ts, &args.output) {
        let target = match args.output {
            Some(ref path) => path.display().to_string(),
            None => String::from("<stdout>"),
        };
        eprintln!("tsfmt: {}: {}", target, e);
        exit(1);
    }
}
