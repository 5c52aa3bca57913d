//! Enhancement and negative prompt tables
//!
//! Both tables are closed enums over `&'static str` constants. Unknown names
//! resolve to the default entry instead of failing, including when
//! deserialized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aesthetic style selecting the enhancement suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Style {
    #[default]
    Realistic,
    Artistic,
    Professional,
    Cinematic,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Realistic,
        Style::Artistic,
        Style::Professional,
        Style::Cinematic,
    ];

    /// Resolve a style name. Matching is exact; anything else is `Realistic`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "artistic" => Self::Artistic,
            "professional" => Self::Professional,
            "cinematic" => Self::Cinematic,
            _ => Self::Realistic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Artistic => "artistic",
            Self::Professional => "professional",
            Self::Cinematic => "cinematic",
        }
    }

    /// Quality keywords appended to a prompt in this style
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Realistic => "photorealistic, high quality, detailed, 8k resolution",
            Self::Artistic => "artistic, beautiful, masterpiece, high quality",
            Self::Professional => "professional photography, studio lighting, high quality",
            Self::Cinematic => "cinematic lighting, dramatic, high quality, film photography",
        }
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject category selecting the negative prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NegativeCategory {
    #[default]
    General,
    Portrait,
    Landscape,
    Object,
}

impl NegativeCategory {
    pub const ALL: [NegativeCategory; 4] = [
        NegativeCategory::General,
        NegativeCategory::Portrait,
        NegativeCategory::Landscape,
        NegativeCategory::Object,
    ];

    /// Resolve a category name. Matching is exact; anything else is `General`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "portrait" => Self::Portrait,
            "landscape" => Self::Landscape,
            "object" => Self::Object,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Object => "object",
        }
    }

    /// Attributes the model should avoid for this category
    pub fn exclusions(&self) -> &'static str {
        match self {
            Self::General => {
                "blurry, low quality, distorted, deformed, bad anatomy, bad proportions"
            }
            Self::Portrait => {
                "blurry, low quality, bad face, deformed face, extra limbs, bad anatomy"
            }
            Self::Landscape => {
                "blurry, low quality, distorted horizon, bad composition, oversaturated"
            }
            Self::Object => "blurry, low quality, deformed, bad shape, unrealistic proportions",
        }
    }
}

impl From<String> for NegativeCategory {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for NegativeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
