/*!
 * Common test utilities for the xliffgen test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;
use xliffgen::message::Message;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample messages file for testing
pub fn create_test_messages(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"[
  {
    "id": "greeting",
    "messageParts": ["Hello ", "!"],
    "placeholderNames": ["INTERPOLATION"],
    "description": "Shown on the home page"
  },
  {
    "messageId": "legacy-link",
    "messageParts": ["Read ", "the docs", " now"],
    "placeholderNames": ["START_LINK", "CLOSE_LINK"],
    "meaning": "call to action"
  }
]
"#;
    create_test_file(dir, filename, content)
}

/// Converts string slices into owned message parts
pub fn parts(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Builds a message from parts and placeholder names
pub fn message(id: &str, message_parts: &[&str], placeholder_names: &[&str]) -> Message {
    Message::new(id, parts(message_parts), parts(placeholder_names))
}
