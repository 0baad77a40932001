//! UI language and the Hebcal language tags that go with it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LuachError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    /// Hebrew without nikud.
    #[serde(rename = "he")]
    Hebrew,
}

impl Locale {
    /// Value of Hebcal's `lg` query parameter.
    pub fn hebcal_tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Hebrew => "he-x-NoNikud",
        }
    }

    pub fn toggled(self) -> Locale {
        match self {
            Locale::English => Locale::Hebrew,
            Locale::Hebrew => Locale::English,
        }
    }

    pub fn is_hebrew(self) -> bool {
        self == Locale::Hebrew
    }
}

impl FromStr for Locale {
    type Err = LuachError;

    /// Accepts the short codes as well as Hebcal's own tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "he" | "he-x-nonikud" | "hebrew" => Ok(Locale::Hebrew),
            other => Err(LuachError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::Hebrew => write!(f, "he"),
        }
    }
}
