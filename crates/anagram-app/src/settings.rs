use anagram_core::TargetLength;
use anagram_puzzle::SessionOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub editor: EditorSettings,
}

/// Editor behavior.
///
/// `max_length` is the slider cap and the limit for length growth on pool edits.
/// Values outside `1..=20` are clamped when read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub max_length: u8,
    pub default_length: u8,
    pub auto_shuffle_on_pool_edit: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_length: 15,
            default_length: 5,
            auto_shuffle_on_pool_edit: true,
        }
    }
}

impl EditorSettings {
    #[must_use]
    pub fn max_length(&self) -> TargetLength {
        TargetLength::clamped(self.max_length.into(), TargetLength::ABSOLUTE_MAX)
    }

    #[must_use]
    pub fn default_length(&self) -> TargetLength {
        TargetLength::clamped(self.default_length.into(), self.max_length())
    }

    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions::default()
            .max_length(self.max_length())
            .auto_shuffle_on_pool_edit(self.auto_shuffle_on_pool_edit)
    }
}
