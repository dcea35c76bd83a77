/*!
 * Common test utilities for the c2rs test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample C header file for testing
pub fn create_test_header(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"/* Error numbers */
#define EPERM 1 /* Operation not permitted */
#define ENOENT 2

SIGHUP = 1
SIGINT = 2 /* Interrupt */

int unrelated_code();
"#;
    create_test_file(dir, filename, content)
}
