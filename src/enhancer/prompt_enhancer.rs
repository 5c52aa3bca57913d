//! Prompt Enhancer - Core enhancement logic
//!
//! `enhance` and `negative_prompt` are total: unknown style or category names
//! fall back to `realistic` and `general` respectively.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tables::{NegativeCategory, Style};

/// Append the style suffix to a prompt. The prompt is used verbatim.
pub fn enhance(prompt: &str, style: &str) -> String {
    enhance_with(prompt, Style::from_name(style))
}

/// Typed form of `enhance`
pub fn enhance_with(prompt: &str, style: Style) -> String {
    format!("{}, {}", prompt, style.suffix())
}

/// Negative prompt for a category name
pub fn negative_prompt(category: &str) -> String {
    NegativeCategory::from_name(category).exclusions().to_string()
}

/// Input for `PromptEnhancer::prepare`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    /// User-supplied negative prompt; blank means "use the category default"
    #[serde(default)]
    pub negative_prompt: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default = "default_use_enhancement")]
    pub use_enhancement: bool,
    #[serde(default)]
    pub negative_category: NegativeCategory,
}

fn default_use_enhancement() -> bool {
    true
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: String::new(),
            style: Style::default(),
            use_enhancement: true,
            negative_category: NegativeCategory::default(),
        }
    }
}

/// Prompt pair ready to be sent to a diffusion model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPrompt {
    pub prompt: String,
    pub negative_prompt: String,
    pub style: Style,
    /// Whether the style suffix was applied
    pub enhanced: bool,
}

/// Prompt Enhancer
#[derive(Debug, Clone, Default)]
pub struct PromptEnhancer {
    preprocess: bool,
}

impl PromptEnhancer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean up prompt whitespace before enhancing (see `text::preprocess_text`)
    pub fn with_preprocessing(mut self, enabled: bool) -> Self {
        self.preprocess = enabled;
        self
    }

    /// Build the final prompt pair for a request
    ///
    /// Enhancement is skipped for blank prompts even when requested, and a
    /// blank negative prompt is replaced by the category default.
    pub fn prepare(&self, request: PromptRequest) -> PreparedPrompt {
        let PromptRequest {
            prompt,
            negative_prompt: user_negative,
            style,
            use_enhancement,
            negative_category,
        } = request;

        let blank = prompt.trim().is_empty();
        let prompt = if self.preprocess && !blank {
            super::text::preprocess_text(&prompt)
        } else {
            prompt
        };

        let enhanced = use_enhancement && !blank;
        let prompt = if enhanced {
            enhance_with(&prompt, style)
        } else {
            prompt
        };

        let negative_prompt = if user_negative.trim().is_empty() {
            negative_category.exclusions().to_string()
        } else {
            user_negative
        };

        debug!(
            "Prepared prompt (style: {}, enhanced: {}, negative: {})",
            style, enhanced, negative_category
        );

        PreparedPrompt {
            prompt,
            negative_prompt,
            style,
            enhanced,
        }
    }
}
