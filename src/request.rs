//! Generation request payload for the diffusion inference service

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ModelPreset;
use crate::enhancer::PreparedPrompt;

/// Most images a single request may ask for
pub const MAX_IMAGES_PER_REQUEST: u32 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("num_images must be between 1 and {max}, got {got}")]
    ImageCount { got: u32, max: u32 },
    #[error("prompt cannot be empty")]
    EmptyPrompt,
}

/// Request body sent to the inference service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub num_images_per_prompt: u32,
    pub num_inference_steps: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GenerationRequest {
    /// Combine a model preset with a prepared prompt
    ///
    /// Guidance-free presets carry neither a guidance scale nor a negative
    /// prompt, since the model would ignore the negative anyway.
    pub fn build(
        preset: &ModelPreset,
        prepared: &PreparedPrompt,
        num_images: u32,
        seed: Option<u64>,
    ) -> Result<Self, RequestError> {
        if prepared.prompt.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        if !(1..=MAX_IMAGES_PER_REQUEST).contains(&num_images) {
            return Err(RequestError::ImageCount {
                got: num_images,
                max: MAX_IMAGES_PER_REQUEST,
            });
        }

        let guidance_scale = preset.uses_guidance().then_some(preset.guidance_scale);
        let negative_prompt = match guidance_scale {
            Some(_) if !prepared.negative_prompt.trim().is_empty() => {
                Some(prepared.negative_prompt.clone())
            }
            _ => None,
        };

        Ok(Self {
            model: preset.repo_id.clone(),
            prompt: prepared.prompt.clone(),
            negative_prompt,
            num_images_per_prompt: num_images,
            num_inference_steps: preset.inference_steps,
            width: preset.width,
            height: preset.height,
            guidance_scale,
            seed,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
