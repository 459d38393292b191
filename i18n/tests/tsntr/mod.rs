//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_with_env, TestPlan};

const PLACES: &str = "%n place(s) found";

fn tsntr_test(args: &[&str], expected_out: &str) {
    run_test(TestPlan {
        cmd: String::from("tsntr"),
        args: args.iter().map(|s| s.to_string()).collect(),
        stdin_data: String::new(),
        expected_out: String::from(expected_out),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

fn places(catalog: &str, count: &str, expected_out: &str) {
    tsntr_test(
        &["-f", catalog, "PlaceHeader", PLACES, count],
        expected_out,
    );
}

/// Spanish and Swedish use the singular for exactly one
#[test]
fn test_tsntr_one_or_other() {
    places("../translations/es.ts", "1", "1 lugar encontrado\n");
    places("../translations/es.ts", "0", "0 lugares encontrados\n");
    places("../translations/es.ts", "5", "5 lugares encontrados\n");
    places("../translations/sv.ts", "1", "1 plats hittad\n");
    places("../translations/sv.ts", "2", "2 platser hittade\n");
}

/// French uses the singular for zero and one
#[test]
fn test_tsntr_french() {
    places("../translations/fr_FR.ts", "0", "0 lieu trouvé\n");
    places("../translations/fr_FR.ts", "1", "1 lieu trouvé\n");
    places("../translations/fr_FR.ts", "2", "2 lieux trouvés\n");
}

/// Chinese has a single form
#[test]
fn test_tsntr_invariant() {
    places("../translations/zh_CN.ts", "1", "发现1的地点\n");
    places("../translations/zh_CN.ts", "3", "发现3的地点\n");
}

/// Untranslated plural messages print the source with the count
#[test]
fn test_tsntr_source_fallback() {
    places("../translations/harbour-maep-qt.ts", "4", "4 place(s) found\n");
    tsntr_test(
        &["-D", "../translations", "-L", "C", "PlaceHeader", PLACES, "4"],
        "4 place(s) found\n",
    );
}

#[test]
fn test_tsntr_environment_locale() {
    run_test_with_env(
        TestPlan {
            cmd: String::from("tsntr"),
            args: vec![
                String::from("PlaceHeader"),
                String::from(PLACES),
                String::from("7"),
            ],
            stdin_data: String::new(),
            expected_out: String::from("7 platser hittade\n"),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        &[("MAEP_TRANSLATIONS", "../translations"), ("LC_MESSAGES", "sv_FI")],
    );
}

#[test]
fn test_tsntr_no_newline() {
    tsntr_test(
        &["-n", "-f", "../translations/es.ts", "PlaceHeader", PLACES, "2"],
        "2 lugares encontrados",
    );
}

#[test]
fn test_tsntr_invalid_count() {
    run_test(TestPlan {
        cmd: String::from("tsntr"),
        args: vec![
            String::from("-f"),
            String::from("../translations/es.ts"),
            String::from("PlaceHeader"),
            String::from(PLACES),
            String::from("abc"),
        ],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from("tsntr: invalid count: abc\n"),
        expected_exit_code: 1,
    });
}
