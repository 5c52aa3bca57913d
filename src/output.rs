//! Output file naming for generated images

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::config::OutputSettings;

/// Longest file stem derived from a prompt, in characters
pub const MAX_STEM_CHARS: usize = 50;

/// Filesystem-safe stem: alphanumerics, spaces, `-` and `_` only
pub fn safe_stem(prompt: &str) -> String {
    let kept: String = prompt
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().chars().take(MAX_STEM_CHARS).collect()
}

/// `{stem}_{YYYYmmdd_HHMMSS}_{n}.{format}` with `n` counting from 1
pub fn image_file_name(
    prompt: &str,
    timestamp: NaiveDateTime,
    index: usize,
    image_format: &str,
) -> String {
    format!(
        "{}_{}_{}.{}",
        safe_stem(prompt),
        timestamp.format("%Y%m%d_%H%M%S"),
        index + 1,
        image_format.to_lowercase()
    )
}

/// Paths for `count` images generated from one prompt
pub fn image_paths(
    settings: &OutputSettings,
    prompt: &str,
    count: usize,
    timestamp: NaiveDateTime,
) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            settings
                .directory
                .join(image_file_name(prompt, timestamp, i, &settings.image_format))
        })
        .collect()
}

/// Create the output directory if it doesn't exist
pub fn ensure_output_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        tracing::info!("Created output directory {}", dir.display());
    }
    Ok(dir.to_path_buf())
}
