//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_with_checker, TestPlan};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary .ts file for testing
fn create_temp_ts_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let ts_path = temp_dir.path().join("test.ts");
    let mut file = File::create(&ts_path).unwrap();
    write!(file, "{}", content).unwrap();
    (temp_dir, ts_path)
}

fn tslint_test(args: &[&str], expected_err: &str, expected_exit_code: i32) {
    run_test(TestPlan {
        cmd: String::from("tslint"),
        args: args.iter().map(|s| s.to_string()).collect(),
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from(expected_err),
        expected_exit_code,
    });
}

/// All shipped catalogs pass the checks
#[test]
fn test_tslint_shipped_catalogs() {
    tslint_test(
        &[
            "../translations/es.ts",
            "../translations/fr_FR.ts",
            "../translations/sv.ts",
            "../translations/zh_CN.ts",
            "../translations/harbour-maep-qt.ts",
        ],
        "",
        0,
    );
}

/// Test --statistics on a translated catalog and the template
#[test]
fn test_tslint_statistics() {
    tslint_test(
        &[
            "--statistics",
            "../translations/es.ts",
            "../translations/harbour-maep-qt.ts",
        ],
        "../translations/es.ts: 101 finished, 0 unfinished, 0 obsolete messages.\n\
         ../translations/harbour-maep-qt.ts: 0 finished, 101 unfinished, 0 obsolete messages.\n",
        0,
    );
}

/// Test -D directory search
#[test]
fn test_tslint_search_directory() {
    tslint_test(&["-D", "../translations", "sv.ts"], "", 0);
}

/// Test a translation that drops a placeholder
#[test]
fn test_tslint_missing_placeholder() {
    let ts_content = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="es">
<context>
    <name>About</name>
    <message>
        <source>Version %1 - %2</source>
        <translation>Versión %1</translation>
    </message>
</context>
</TS>
"#;

    let (_temp_dir, ts_path) = create_temp_ts_file(ts_content);
    let path = ts_path.to_str().unwrap();

    tslint_test(
        &[path],
        &format!(
            "{}:6: error: About: placeholders differ in translation of \"Version %1 - %2\": missing %2\n",
            path
        ),
        1,
    );
}

/// Test numerus form count against the locale plural rule
#[test]
fn test_tslint_numerus_count() {
    let ts_content = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="zh_CN">
<context>
    <name>PlaceHeader</name>
    <message numerus="yes">
        <source>%n place(s) found</source>
        <translation>
            <numerusform>发现%n的地点</numerusform>
            <numerusform>发现%n的地点</numerusform>
        </translation>
    </message>
</context>
</TS>
"#;

    let (_temp_dir, ts_path) = create_temp_ts_file(ts_content);
    let path = ts_path.to_str().unwrap();

    tslint_test(
        &[path],
        &format!(
            "{}:6: error: PlaceHeader: \"%n place(s) found\" has 2 numerus form(s), language \"zh_CN\" needs 1\n",
            path
        ),
        1,
    );
}

/// Reordered placeholders are a warning, shown with -v, an error with -s
#[test]
fn test_tslint_reordered() {
    let ts_content = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="sv">
<context>
    <name>TrackHeader</name>
    <message>
        <source>%1 h %2</source>
        <translation>%2 min %1 h</translation>
    </message>
</context>
</TS>
"#;

    let (_temp_dir, ts_path) = create_temp_ts_file(ts_content);
    let path = ts_path.to_str().unwrap();
    let message = "TrackHeader: placeholders reordered in translation of \"%1 h %2\"";

    tslint_test(&[path], "", 0);
    tslint_test(
        &["-v", path],
        &format!("{}:6: warning: {}\n", path, message),
        0,
    );
    tslint_test(
        &["-s", path],
        &format!("{}:6: error: {}\n", path, message),
        1,
    );
}

/// Test duplicate source strings within one context
#[test]
fn test_tslint_duplicate() {
    let ts_content = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR">
<context>
    <name>TrackView</name>
    <message>
        <source>clear</source>
        <translation>effacer</translation>
    </message>
    <message>
        <source>clear</source>
        <translation>vider</translation>
    </message>
</context>
</TS>
"#;

    let (_temp_dir, ts_path) = create_temp_ts_file(ts_content);
    let path = ts_path.to_str().unwrap();

    tslint_test(
        &[path],
        &format!(
            "{}:10: error: TrackView: duplicate message \"clear\"\n",
            path
        ),
        1,
    );
}

/// Test reading a catalog from stdin
#[test]
fn test_tslint_stdin() {
    let ts_content = r#"<TS version="2.1" language="es">
<context>
    <name>main</name>
    <message>
        <source>at %L1 km</source>
        <translation>a %1 km</translation>
    </message>
</context>
</TS>
"#;

    run_test(TestPlan {
        cmd: String::from("tslint"),
        args: vec![String::from("-")],
        stdin_data: String::from(ts_content),
        expected_out: String::new(),
        expected_err: String::from(
            "<stdin>:4: error: main: placeholders differ in translation of \"at %L1 km\": missing %L1, unexpected %1\n",
        ),
        expected_exit_code: 1,
    });
}

/// Test malformed XML
#[test]
fn test_tslint_malformed() {
    let (_temp_dir, ts_path) = create_temp_ts_file("<TS>\n<context>\n<name>x</context>\n</TS>\n");
    let path = ts_path.to_str().unwrap().to_string();

    run_test_with_checker(
        TestPlan {
            cmd: String::from("tslint"),
            args: vec![path.clone()],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with(&format!("tslint: {}: line 3: ", path)));
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}

/// Test a missing input file
#[test]
fn test_tslint_missing_file() {
    tslint_test(
        &["nonexistent.ts"],
        "tslint: nonexistent.ts: No such file or directory (os error 2)\n",
        1,
    );
}
