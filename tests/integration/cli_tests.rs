/*!
 * Integration tests for the c2rs command line interface
 */

use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

/// Run the compiled binary with the given arguments
fn run_c2rs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_c2rs"))
        .args(args)
        .output()
        .expect("Failed to execute c2rs binary")
}

/// Test full translation of a sample header file
#[test]
fn test_cli_withSampleHeader_shouldTranslateExactly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let header = common::create_test_header(&temp_dir.path().to_path_buf(), "errno.h")?;

    let output = run_c2rs(&[header.to_str().unwrap()]);

    assert!(output.status.success(), "run should succeed: {:?}", output);
    let expected = "\
/// Error numbers
/// Operation not permitted
pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;

pub const SIGHUP: i32 = 1;
/// Interrupt
pub const SIGINT: i32 = 2;

int unrelated_code();
";
    assert_eq!(String::from_utf8(output.stdout)?, expected);
    Ok(())
}

/// Test the documented end-to-end scenarios line by line
#[test]
fn test_cli_withScenarioLines_shouldMatchDocumentedOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let cases = [
        (
            "#define FOO 42 /* the answer */\n",
            "/// the answer\npub const FOO: i32 = 42;\n",
        ),
        ("#define BAR 7\n", "pub const BAR: i32 = 7;\n"),
        (
            "  BAZ = 0x10 // trailing\n",
            "pub const BAZ: i32 = 0x10; // trailing\n",
        ),
        ("/* standalone doc line */\n", "/// standalone doc line\n"),
        ("int unrelated_code();\n", "int unrelated_code();\n"),
    ];

    for (index, (input, expected)) in cases.iter().enumerate() {
        let path = common::create_test_file(
            &temp_dir.path().to_path_buf(),
            &format!("case_{}.h", index),
            input,
        )?;
        let output = run_c2rs(&[path.to_str().unwrap()]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout)?,
            *expected,
            "unexpected translation for {:?}",
            input
        );
    }
    Ok(())
}

/// Test that a file without a final newline is forwarded byte for byte
#[test]
fn test_cli_withNoTrailingNewline_shouldPreserveBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "partial.h",
        "int unrelated_code();",
    )?;

    let output = run_c2rs(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"int unrelated_code();");
    Ok(())
}

/// Test invocation without arguments
#[test]
fn test_cli_withNoArguments_shouldPrintUsageAndExit1() -> Result<()> {
    let output = run_c2rs(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Usage: "), "got: {}", stdout);
    assert!(stdout.trim_end().ends_with("input-file"), "got: {}", stdout);
    Ok(())
}

/// Test invocation with a surplus argument
#[test]
fn test_cli_withTwoInputFiles_shouldPrintUsageAndExit1() -> Result<()> {
    let output = run_c2rs(&["first.h", "second.h"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Usage: "), "got: {}", stdout);
    Ok(())
}

/// Test invocation against a file that does not exist
#[test]
fn test_cli_withMissingInputFile_shouldFailWithDiagnostic() -> Result<()> {
    let output = run_c2rs(&["/nonexistent/errno.h"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout must stay clean on failure");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("/nonexistent/errno.h"), "got: {}", stderr);
    Ok(())
}
