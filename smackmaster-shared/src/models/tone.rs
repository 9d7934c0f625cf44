// SPDX-License-Identifier: GPL-3.0-only
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumCount, EnumIter, VariantArray, VariantNames};

/// Stylistic mode sent to the roast generator alongside the comment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    AsRefStr,
    EnumCount,
    EnumIter,
    VariantArray,
    VariantNames,
    Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Tone {
    #[default]
    Nice,
    Smart,
    Rude,
    Brutal,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.machine_name())
    }
}

impl Tone {
    /// Name used on the wire, e.g. `RUDE`
    #[must_use]
    pub fn machine_name(&self) -> &'static str {
        match self {
            Tone::Nice => "NICE",
            Tone::Smart => "SMART",
            Tone::Rude => "RUDE",
            Tone::Brutal => "BRUTAL",
        }
    }

    /// Human readable label for tone pickers
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Nice => "Nice",
            Tone::Smart => "Smart",
            Tone::Rude => "Rude",
            Tone::Brutal => "Brutal",
        }
    }

    /// Case-insensitive lookup by machine name. Unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Tone> {
        Tone::iter().find(|tone| tone.machine_name().eq_ignore_ascii_case(key))
    }

    /// Get all available tones in display order
    #[must_use]
    pub fn all_tones() -> Vec<Tone> {
        Tone::iter().collect()
    }
}
