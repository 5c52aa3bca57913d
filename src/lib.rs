//! t2i-prompt library - prompt enhancement and request preparation for text-to-image models

pub mod config;
pub mod enhancer;
pub mod output;
pub mod request;

// Re-export commonly used types
pub use config::{Config, ConfigOptions, ModelPreset, OutputSettings};
pub use enhancer::{
    enhance, negative_prompt, NegativeCategory, PreparedPrompt, PromptEnhancer, PromptRequest,
    Style,
};
pub use request::{GenerationRequest, RequestError};
