//! Loading `cream.json` from disk.

use cream_options::{find_config_file, parse_config_file, OptionsError, RunOptions, TokenFormat};
use std::fs;

#[test]
fn test_find_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_config_file(dir.path()).is_none());

    fs::write(dir.path().join("cream.json"), r#"{ "tokenFormat": "json" }"#).unwrap();
    let path = find_config_file(dir.path()).unwrap();
    let options = RunOptions::from(parse_config_file(&path).unwrap());
    assert_eq!(options.token_format, TokenFormat::Json);
    assert!(options.history);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_config_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, OptionsError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cream.json");
    fs::write(&path, "{ tokenFormat: ").unwrap();
    let err = parse_config_file(&path).unwrap_err();
    assert!(matches!(err, OptionsError::Parse { .. }));
}
