use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages whose front-ends normalize into this data model.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Rust,
}

/// Self-reference keywords appearing at the head of a property chain.
/// These are never routed through variable resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfKeyword {
    /// `this` (JS/TS) or `self` (Python/Rust): the enclosing type.
    Current,
    /// `super`: the enclosing type's declared parent.
    Parent,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Self::TypeScript),
            "py" | "pyi" => Some(Self::Python),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Classify a chain segment as a self-reference keyword for this language.
    pub fn self_keyword(&self, segment: &str) -> Option<SelfKeyword> {
        match (self, segment) {
            (Self::JavaScript | Self::TypeScript, "this") => Some(SelfKeyword::Current),
            (Self::Python | Self::Rust, "self") => Some(SelfKeyword::Current),
            (_, "super") => Some(SelfKeyword::Parent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
