//! Configuration module - model presets and output settings

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Model used when neither the config file nor the CLI picks one
pub const DEFAULT_MODEL: &str = "cpu_compatible";

/// Diffusion model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelPreset {
    /// Model repository identifier on the inference service
    pub repo_id: String,
    #[serde(default)]
    pub description: String,
    pub inference_steps: u32,
    /// 0.0 disables classifier-free guidance (and with it, negative prompts)
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

impl ModelPreset {
    fn new(
        repo_id: &str,
        description: &str,
        inference_steps: u32,
        guidance_scale: f32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            repo_id: repo_id.to_string(),
            description: description.to_string(),
            inference_steps,
            guidance_scale,
            width,
            height,
        }
    }

    pub fn uses_guidance(&self) -> bool {
        self.guidance_scale > 0.0
    }

    fn validate(&self, key: &str) -> Result<()> {
        if self.repo_id.trim().is_empty() {
            return Err(anyhow!("model '{}' has an empty repo_id", key));
        }
        if self.inference_steps == 0 {
            return Err(anyhow!("model '{}' must use at least one inference step", key));
        }
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "model '{}' has invalid resolution {}x{}",
                key,
                self.width,
                self.height
            ));
        }
        if !self.guidance_scale.is_finite() || self.guidance_scale < 0.0 {
            return Err(anyhow!(
                "model '{}' has invalid guidance_scale {}",
                key,
                self.guidance_scale
            ));
        }
        Ok(())
    }
}

/// Where and how generated images are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub image_format: String,
    pub quality: u8,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("outputs/generated"),
            image_format: "png".to_string(),
            quality: 95,
        }
    }
}

/// Optional overrides, typically read from a JSON config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOptions {
    pub default_model: Option<String>,
    pub output_directory: Option<PathBuf>,
    pub image_format: Option<String>,
    pub quality: Option<u8>,
    /// Extra presets; a key matching a built-in replaces it
    #[serde(default)]
    pub models: BTreeMap<String, ModelPreset>,
}

impl ConfigOptions {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let options = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(options)
    }
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub default_model: String,
    pub models: BTreeMap<String, ModelPreset>,
    pub output: OutputSettings,
}

impl Config {
    /// Merge options over the built-in presets and validate the result
    pub fn new(options: ConfigOptions) -> Result<Arc<Self>> {
        let mut models = default_models();
        models.extend(options.models);

        for (key, preset) in &models {
            preset.validate(key)?;
        }

        let default_model = options
            .default_model
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if !models.contains_key(&default_model) {
            return Err(anyhow!(
                "default_model '{}' is not a known model (available: {})",
                default_model,
                available(&models)
            ));
        }

        let defaults = OutputSettings::default();
        let image_format = options
            .image_format
            .map(|f| f.trim().trim_start_matches('.').to_lowercase())
            .unwrap_or(defaults.image_format);
        if image_format.is_empty() {
            return Err(anyhow!("image_format cannot be empty"));
        }

        let quality = options.quality.unwrap_or(defaults.quality);
        if !(1..=100).contains(&quality) {
            return Err(anyhow!("quality must be between 1 and 100, got {}", quality));
        }

        Ok(Arc::new(Self {
            default_model,
            models,
            output: OutputSettings {
                directory: options.output_directory.unwrap_or(defaults.directory),
                image_format,
                quality,
            },
        }))
    }

    /// Load options from `path` when given, otherwise use the built-ins
    pub fn load(path: Option<&Path>) -> Result<Arc<Self>> {
        let options = match path {
            Some(path) => ConfigOptions::from_file(path)?,
            None => ConfigOptions::default(),
        };
        Self::new(options)
    }

    /// Look up a preset; `None` selects the default model
    pub fn preset(&self, key: Option<&str>) -> Result<(&str, &ModelPreset)> {
        let key = key.unwrap_or(self.default_model.as_str());
        self.models
            .get_key_value(key)
            .map(|(k, preset)| (k.as_str(), preset))
            .ok_or_else(|| {
                anyhow!(
                    "Unknown model '{}' (available: {})",
                    key,
                    available(&self.models)
                )
            })
    }
}

fn available(models: &BTreeMap<String, ModelPreset>) -> String {
    models.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Built-in model presets
fn default_models() -> BTreeMap<String, ModelPreset> {
    [
        (
            "flux_schnell",
            ModelPreset::new(
                "black-forest-labs/FLUX.1-schnell",
                "Fast and lightweight FLUX model for quick generation",
                4,
                0.0,
                1024,
                1024,
            ),
        ),
        (
            "small_stable_diffusion",
            ModelPreset::new(
                "OFA-Sys/small-stable-diffusion-v0",
                "Small version of Stable Diffusion for lightweight usage",
                20,
                7.5,
                512,
                512,
            ),
        ),
        (
            "cpu_compatible",
            ModelPreset::new(
                "CompVis/stable-diffusion-v1-4",
                "CPU-compatible Stable Diffusion model",
                10,
                7.5,
                512,
                512,
            ),
        ),
    ]
    .into_iter()
    .map(|(key, preset)| (key.to_string(), preset))
    .collect()
}
