use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A locale code such as `zh`, `en` or `zh-CN`.
///
/// The primary language subtag is normalized to lowercase and `_` separators
/// are accepted and normalized to `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Locale {
    code: String,
}

/// Error returned when a locale code is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleError {
    pub code: String,
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid locale '{}', expected a code like 'en', 'zh' or 'zh-CN'",
            self.code
        )
    }
}

impl std::error::Error for LocaleError {}

impl Locale {
    /// Build a locale from a code known to be well-formed at compile time.
    pub fn from_static(code: &'static str) -> Self {
        debug_assert!(code.parse::<Locale>().is_ok(), "malformed locale {code}");
        Self {
            code: code.to_string(),
        }
    }

    /// The full normalized code (e.g., `zh-CN`).
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The primary language subtag (e.g., `zh` for `zh-CN`).
    pub fn language(&self) -> &str {
        self.code.split('-').next().unwrap_or(&self.code)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || LocaleError {
            code: s.to_string(),
        };

        let mut parts = s.split(['-', '_']);
        let language = parts.next().ok_or_else(err)?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(err());
        }

        let mut code = language.to_ascii_lowercase();
        for part in parts {
            if !(1..=8).contains(&part.len()) || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(err());
            }
            code.push('-');
            code.push_str(part);
        }

        Ok(Self { code })
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let locale: Locale = "en".parse().unwrap();
        assert_eq!(locale.as_str(), "en");
        assert_eq!(locale.language(), "en");
    }

    #[test]
    fn test_parse_region() {
        let locale: Locale = "ZH_CN".parse().unwrap();
        assert_eq!(locale.as_str(), "zh-CN");
        assert_eq!(locale.language(), "zh");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Locale>().is_err());
        assert!("e".parse::<Locale>().is_err());
        assert!("english".parse::<Locale>().is_err());
        assert!("zh-".parse::<Locale>().is_err());
        assert!("zh-Hans-CN!".parse::<Locale>().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = "x".parse::<Locale>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid locale 'x', expected a code like 'en', 'zh' or 'zh-CN'"
        );
    }

    #[test]
    fn test_serde() {
        let locale: Locale = serde_json::from_str(r#""ja""#).unwrap();
        assert_eq!(locale.as_str(), "ja");
        assert_eq!(serde_json::to_string(&locale).unwrap(), r#""ja""#);
        assert!(serde_json::from_str::<Locale>(r#""??""#).is_err());
    }
}
