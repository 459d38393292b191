//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Subprocess test harness
//!
//! Integration tests run the built utilities from the workspace target
//! directory, feed them stdin, and compare stdout, stderr and the exit
//! code against a plan.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Environment variables that would leak the caller's locale setup
/// into a test run.
const SCRUBBED_VARS: &[&str] = &[
    "LC_ALL",
    "LC_MESSAGES",
    "LANG",
    "MAEP_TRANSLATIONS",
    "MAEP_LOG",
];

fn binary_path(cmd: &str) -> PathBuf {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    // Tests run from the package directory; binaries live under the
    // workspace target directory one level up unless overridden.
    let target_dir = match std::env::var_os("CARGO_TARGET_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .unwrap()
            .parent()
            .unwrap()
            .join("target"),
    };

    target_dir.join(profile).join(cmd)
}

/// Run a utility with the given arguments, stdin and environment
pub fn run_test_base_with_env(
    cmd: &str,
    args: &[String],
    stdin_data: &[u8],
    env_vars: &[(&str, &str)],
) -> Output {
    let mut command = Command::new(binary_path(cmd));
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for key in SCRUBBED_VARS {
        command.env_remove(key);
    }
    for (key, value) in env_vars {
        command.env(key, value);
    }

    let mut child = command
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn command {cmd}: {e}"));

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(stdin_data) {
            eprintln!("Error writing to stdin: {}", e);
        }
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test_base(cmd: &str, args: &[String], stdin_data: &[u8]) -> Output {
    run_test_base_with_env(cmd, args, stdin_data, &[])
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}

pub fn run_test(plan: TestPlan) {
    run_test_with_env(plan, &[]);
}

/// Like `run_test` but sets environment variables for the subprocess
pub fn run_test_with_env(plan: TestPlan, env_vars: &[(&str, &str)]) {
    let output = run_test_base_with_env(
        &plan.cmd,
        &plan.args,
        plan.stdin_data.as_bytes(),
        env_vars,
    );
    check_output(&plan, &output);
}

/// Run a utility and hand the raw output to `checker` instead of
/// comparing it against the plan.
pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, checker: F) {
    run_test_with_checker_and_env(plan, &[], checker);
}

pub fn run_test_with_checker_and_env<F: FnMut(&TestPlan, &Output)>(
    plan: TestPlan,
    env_vars: &[(&str, &str)],
    mut checker: F,
) {
    let output = run_test_base_with_env(
        &plan.cmd,
        &plan.args,
        plan.stdin_data.as_bytes(),
        env_vars,
    );
    checker(&plan, &output);
}
