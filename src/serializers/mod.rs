/*!
 * Translation file serializers.
 *
 * Each supported file format has its own `TranslationSerializer`
 * implementation; `TranslationFormat` picks one.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::errors::SerializeError;
use crate::message::Message;

pub mod xliff1;
pub mod xliff2;

pub use xliff1::Xliff1Serializer;
pub use xliff2::Xliff2Serializer;

/// Renders a list of messages into a complete translation file
pub trait TranslationSerializer: Send + Sync {
    /// Render `messages` for `locale`
    ///
    /// When `is_target_only` is set the source text is left out and only the
    /// target side of each message is written.
    fn render_file(&self, messages: &[Message], locale: &str, is_target_only: bool) -> Result<String, SerializeError>;
}

/// Supported output formats
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationFormat {
    /// XLIFF 1.2
    Xliff,
    /// XLIFF 2.0
    #[default]
    Xliff2,
}

impl TranslationFormat {
    /// Serializer for this format
    pub fn serializer(&self) -> Box<dyn TranslationSerializer> {
        match self {
            Self::Xliff => Box::new(Xliff1Serializer),
            Self::Xliff2 => Box::new(Xliff2Serializer),
        }
    }

    /// File extension used for output files
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xliff | Self::Xliff2 => "xlf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Xliff => "XLIFF 1.2",
            Self::Xliff2 => "XLIFF 2.0",
        }
    }
}

impl std::fmt::Display for TranslationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xliff => write!(f, "xliff"),
            Self::Xliff2 => write!(f, "xliff2"),
        }
    }
}

impl std::str::FromStr for TranslationFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "xliff" | "xlf" | "xliff1" => Ok(Self::Xliff),
            "xliff2" | "xlf2" => Ok(Self::Xliff2),
            _ => Err(anyhow!("Invalid translation format: {}", s)),
        }
    }
}

/// Unit id for the message at `index`
pub(crate) fn unit_id(message: &Message, index: usize) -> Result<&str, SerializeError> {
    message.effective_id().ok_or(SerializeError::MissingId { index })
}
