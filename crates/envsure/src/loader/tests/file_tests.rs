//! Tests for settings-file reading behavior.

use std::fs;
use std::io::ErrorKind;

use tempfile::TempDir;

use crate::error::LoadError;
use crate::loader::file::{Encoding, read_env_file};

#[tokio::test]
async fn missing_file_yields_empty_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");

    let mapping = read_env_file(&path, Encoding::Utf8).await.unwrap();

    assert!(mapping.is_empty(), "missing file should not be an error");
}

#[tokio::test]
async fn empty_file_yields_empty_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "").unwrap();

    let mapping = read_env_file(&path, Encoding::Utf8).await.unwrap();

    assert!(mapping.is_empty());
}

#[tokio::test]
async fn comments_and_quoting_are_handled_by_the_parser() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(
        &path,
        "# baseline settings\nAPI_KEY=file-api-key\nGREETING=\"hello world\"\n",
    )
    .unwrap();

    let mapping = read_env_file(&path, Encoding::Utf8).await.unwrap();

    assert_eq!(mapping.get("API_KEY").map(String::as_str), Some("file-api-key"));
    assert_eq!(mapping.get("GREETING").map(String::as_str), Some("hello world"));
    assert_eq!(mapping.len(), 2);
}

#[tokio::test]
async fn parse_error_carries_index_only_and_never_leaks_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    let secret_value = "supersecret_token_12345";
    fs::write(
        &path,
        format!("PASSWORD={secret_value}\nINVALID LINE WITHOUT EQUALS\n"),
    )
    .unwrap();

    let err = read_env_file(&path, Encoding::Utf8).await.unwrap_err();

    match &err {
        LoadError::EnvFileParse { .. } => {}
        other => panic!("expected EnvFileParse, got {other}"),
    }
    assert!(
        !err.to_string().contains(secret_value),
        "error message must not contain file contents: {err}"
    );
}

#[tokio::test]
async fn invalid_utf8_fails_strict_and_passes_lossy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, b"NAME=caf\xff\n").unwrap();

    let err = read_env_file(&path, Encoding::Utf8).await.unwrap_err();
    match err {
        LoadError::EnvFileIo { kind } => assert_eq!(kind, ErrorKind::InvalidData),
        other => panic!("expected EnvFileIo, got {other}"),
    }

    let mapping = read_env_file(&path, Encoding::Utf8Lossy).await.unwrap();
    assert_eq!(
        mapping.get("NAME").map(String::as_str),
        Some("caf\u{fffd}")
    );
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_file_propagates_io_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "PORT=3000\n").unwrap();

    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o000);
    fs::set_permissions(&path, permissions).unwrap();

    let result = read_env_file(&path, Encoding::Utf8).await;

    // Restore permissions for cleanup
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o644);
    fs::set_permissions(&path, permissions).unwrap();

    match result {
        Err(LoadError::EnvFileIo { kind }) => {
            assert!(
                matches!(kind, ErrorKind::PermissionDenied | ErrorKind::Other),
                "expected PermissionDenied or Other, got {kind:?}"
            );
        }
        // Running as root may still succeed; only the error shape matters.
        Ok(_) => {}
        Err(other) => panic!("expected EnvFileIo, got {other}"),
    }
}
