//! Tests for output naming

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use t2i_prompt::config::OutputSettings;
use t2i_prompt::output::{ensure_output_dir, image_file_name, image_paths, safe_stem};

fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 7)
        .unwrap()
}

#[test]
fn test_safe_stem_strips_punctuation() {
    assert_eq!(safe_stem("a cute dog, playing!"), "a cute dog playing");
    assert_eq!(safe_stem("snake_case-name"), "snake_case-name");
}

#[test]
fn test_safe_stem_strips_trailing_whitespace() {
    assert_eq!(safe_stem("a dog ?? "), "a dog");
}

#[test]
fn test_safe_stem_truncates() {
    let long = "x".repeat(80);
    assert_eq!(safe_stem(&long).len(), 50);

    let multibyte = "é".repeat(80);
    let stem = safe_stem(&multibyte);
    assert_eq!(stem.chars().count(), 50);
    assert_eq!(stem, "é".repeat(50));
}

#[test]
fn test_image_file_name() {
    assert_eq!(
        image_file_name("a cute dog", timestamp(), 0, "PNG"),
        "a cute dog_20240309_140507_1.png"
    );
}

#[test]
fn test_image_paths() {
    let settings = OutputSettings {
        directory: PathBuf::from("out"),
        image_format: "jpeg".to_string(),
        quality: 90,
    };
    let paths = image_paths(&settings, "a cat", 3, timestamp());
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0], PathBuf::from("out/a cat_20240309_140507_1.jpeg"));
    assert_eq!(paths[2], PathBuf::from("out/a cat_20240309_140507_3.jpeg"));
}

#[test]
fn test_ensure_output_dir_creates_nested() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("outputs").join("generated");

    let created = ensure_output_dir(&dir).unwrap();
    assert!(created.is_dir());

    // Idempotent
    assert_eq!(ensure_output_dir(&dir).unwrap(), created);
}
