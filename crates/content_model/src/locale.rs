//! Closed locale set and parsing helpers.

use serde::{Deserialize, Serialize};

/// Supported content locale.
///
/// The set is closed on purpose: content documents are embedded or served by path
/// convention, so an open-ended locale string would only ever miss. [`Locale::En`] is the
/// default and is guaranteed complete for every content-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the fallback locale with complete content.
    #[default]
    En,
    /// Simplified Chinese.
    Cn,
    /// Japanese.
    Jp,
}

impl Locale {
    /// Every supported locale, in presentation order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Cn, Locale::Jp];

    /// Stable lowercase token used in content paths and the persisted preference.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cn => "cn",
            Self::Jp => "jp",
        }
    }

    /// Parses a stored or URL-provided locale token; unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "en" => Some(Self::En),
            "cn" => Some(Self::Cn),
            "jp" => Some(Self::Jp),
            _ => None,
        }
    }

    /// Native-script label for the locale switcher.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Cn => "中文",
            Self::Jp => "日本語",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_supported_locale() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.as_str()), Some(locale));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_uppercase_tokens() {
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn serde_token_matches_path_token() {
        let json = serde_json::to_string(&Locale::Jp).expect("serialize locale");
        assert_eq!(json, "\"jp\"");
        let parsed: Locale = serde_json::from_str("\"cn\"").expect("deserialize locale");
        assert_eq!(parsed, Locale::Cn);
    }
}
