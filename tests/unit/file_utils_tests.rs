/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use xliffgen::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path creates the correct path
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let input_file = Path::new("/tmp/input/messages.json");
    let output_dir = Path::new("/tmp/output");

    let output_path = FileManager::generate_output_path(input_file, output_dir, "pt-BR", "xlf");

    assert_eq!(output_path, Path::new("/tmp/output/messages.pt-BR.xlf"));
}

/// Test that read_messages parses camelCase JSON and legacy ids
#[test]
fn test_read_messages_withValidFile_shouldParseAllMessages() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_messages(temp_dir.path(), "messages.json")?;

    let messages = FileManager::read_messages(&file)?;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].effective_id(), Some("greeting"));
    assert_eq!(messages[1].effective_id(), Some("legacy-link"));
    assert_eq!(messages[1].placeholder_names, vec!["START_LINK", "CLOSE_LINK"]);
    assert_eq!(messages[1].meaning.as_deref(), Some("call to action"));

    Ok(())
}

/// Test that read_messages rejects a part/placeholder count mismatch
#[test]
fn test_read_messages_withMismatchedParts_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(
        temp_dir.path(),
        "bad.json",
        r#"[{"id": "m1", "messageParts": ["a", "b"], "placeholderNames": []}]"#,
    )?;

    let error = FileManager::read_messages(&file).unwrap_err();

    assert!(format!("{:#}", error).contains("has 2 parts but 0 placeholders"));

    Ok(())
}

/// Test that read_messages rejects invalid JSON
#[test]
fn test_read_messages_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    assert!(FileManager::read_messages(&file).is_err());

    Ok(())
}

/// Test that find_files only returns matching extensions, sorted
#[test]
fn test_find_files_withMixedFiles_shouldReturnMatchingSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "b.json", "[]")?;
    common::create_test_file(temp_dir.path(), "a.JSON", "[]")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "")?;

    let files = FileManager::find_files(temp_dir.path(), ".json")?;

    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.JSON", "b.json"]);

    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested").join("out.xlf");

    FileManager::write_to_file(&target, "<xliff/>")?;

    assert_eq!(FileManager::read_to_string(&target)?, "<xliff/>");

    Ok(())
}
