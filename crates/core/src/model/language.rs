use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Languages the quiz content is authored in.
///
/// The set is closed: every variant has a compiled-in string bundle and a
/// field in each question record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Sk,
    Pl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::Sk, Language::Pl];

    /// Parse a language code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "sk" => Some(Self::Sk),
            "pl" => Some(Self::Pl),
            _ => None,
        }
    }

    /// Like `from_code`, but unknown or missing codes resolve to the default language.
    #[must_use]
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Sk => "sk",
            Self::Pl => "pl",
        }
    }

    /// Native name, as shown on the language switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sk => "Slovensky",
            Self::Pl => "Polski",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
