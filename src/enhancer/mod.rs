//! Prompt Enhancer module
//! Enhances user prompts with style keywords and synthesizes negative prompts

pub mod prompt_enhancer;
pub mod tables;
pub mod text;

pub use prompt_enhancer::{
    enhance, enhance_with, negative_prompt, PreparedPrompt, PromptEnhancer, PromptRequest,
};
pub use tables::{NegativeCategory, Style};
pub use text::{extract_keywords, preprocess_text, prompt_variations};
