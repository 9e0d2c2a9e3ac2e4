//! Model value object representing a locally served LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known LLM models (Value Object)
///
/// Names follow the `family:tag` convention used by Ollama. Anything that
/// is not a known model is carried verbatim as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Qwen coder models
    QwenCoder7b,
    QwenCoder14b,
    // Llama models
    Llama31_8b,
    // Gemma models
    CodeGemma7b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::QwenCoder7b => "qwen2.5-coder:7b",
            Model::QwenCoder14b => "qwen2.5-coder:14b",
            Model::Llama31_8b => "llama3.1:8b",
            Model::CodeGemma7b => "codegemma:7b",
            Model::Custom(s) => s,
        }
    }

    /// The models offered for switching when nothing is configured
    pub fn default_models() -> Vec<Model> {
        vec![
            Model::QwenCoder7b,
            Model::QwenCoder14b,
            Model::Llama31_8b,
            Model::CodeGemma7b,
        ]
    }

    /// Model family, i.e. everything before the `:` tag separator
    pub fn family(&self) -> &str {
        let name = self.as_str();
        name.split(':').next().unwrap_or(name)
    }

    /// Check if this is a model not known to the built-in list
    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (qwen2.5-coder:7b)
    fn default() -> Self {
        Model::QwenCoder7b
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "qwen2.5-coder:7b" => Model::QwenCoder7b,
            "qwen2.5-coder:14b" => Model::QwenCoder14b,
            "llama3.1:8b" => Model::Llama31_8b,
            "codegemma:7b" => Model::CodeGemma7b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
