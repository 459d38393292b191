//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use maep_i18n::ts_lib::ts_file::TsFile;
use plib::testing::{run_test, run_test_with_checker, TestPlan};
use std::fs;
use tempfile::TempDir;

/// lupdate output is already canonical and must come back unchanged
#[test]
fn test_tsfmt_canonical_catalogs() {
    for catalog in ["../translations/sv.ts", "../translations/harbour-maep-qt.ts"] {
        let expected = fs::read_to_string(catalog).unwrap();

        run_test(TestPlan {
            cmd: String::from("tsfmt"),
            args: vec![String::from(catalog)],
            stdin_data: String::new(),
            expected_out: expected,
            expected_err: String::new(),
            expected_exit_code: 0,
        });
    }
}

/// Reformatting a compact catalog keeps every message
#[test]
fn test_tsfmt_preserves_messages() {
    let original = TsFile::parse(&fs::read_to_string("../translations/es.ts").unwrap()).unwrap();

    run_test_with_checker(
        TestPlan {
            cmd: String::from("tsfmt"),
            args: vec![String::from("../translations/es.ts")],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            let stdout = String::from_utf8_lossy(&output.stdout);
            let reformatted = TsFile::parse(&stdout).unwrap();
            assert_eq!(reformatted, original);
            assert_eq!(reformatted.statistics().finished, 101);
        },
    );
}

/// Test reformatting from stdin
#[test]
fn test_tsfmt_stdin() {
    let input = concat!(
        r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="fr_FR" version="2.1"><context><name>About</name>"#,
        r#"<message><source>Open bug tracker</source><translation>Ouvrir l&apos;outil de suivi</translation></message>"#,
        r#"<message><source>License</source><translation type="unfinished"/></message>"#,
        r#"</context></TS>"#
    );

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR">
<context>
    <name>About</name>
    <message>
        <source>Open bug tracker</source>
        <translation>Ouvrir l&apos;outil de suivi</translation>
    </message>
    <message>
        <source>License</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    run_test(TestPlan {
        cmd: String::from("tsfmt"),
        args: vec![String::from("-")],
        stdin_data: String::from(input),
        expected_out: String::from(expected),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// Test --drop-obsolete with an output file
#[test]
fn test_tsfmt_drop_obsolete() {
    let input = r#"<TS version="2.1" language="sv">
<context>
    <name>Sources</name>
    <message>
        <source>Old source</source>
        <translation type="obsolete">Gammal källa</translation>
    </message>
</context>
<context>
    <name>TrackView</name>
    <message>
        <source>clear</source>
        <translation>rensa</translation>
    </message>
    <message>
        <source>gone</source>
        <translation type="vanished">borta</translation>
    </message>
</context>
</TS>
"#;

    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("out.ts");

    run_test(TestPlan {
        cmd: String::from("tsfmt"),
        args: vec![
            String::from("--drop-obsolete"),
            String::from("-o"),
            out_path.to_str().unwrap().to_string(),
            String::from("-"),
        ],
        stdin_data: String::from(input),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    let written = fs::read_to_string(&out_path).unwrap();
    let ts = TsFile::parse(&written).unwrap();
    assert_eq!(ts.contexts.len(), 1);
    assert_eq!(ts.contexts[0].name, "TrackView");
    assert_eq!(ts.contexts[0].messages.len(), 1);
    assert!(!written.contains("obsolete"));
}

/// Test malformed input
#[test]
fn test_tsfmt_malformed() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("tsfmt"),
            args: vec![String::from("-")],
            stdin_data: String::from("<TS>\n<context>\n"),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("tsfmt: <stdin>: line "));
            assert!(output.stdout.is_empty());
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}
