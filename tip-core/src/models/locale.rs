use std::{fmt, str::FromStr};

use icu::locid::{Locale, locale};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variables consulted for the default locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Error returned when a locale tag names a locale without currency support.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unsupported locale '{0}'")]
    Unsupported(String),
}

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$2.00`
    Prefix,
    /// `2,00 €` (separated by a no-break space)
    Suffix,
}

/// Locales the currency formatter knows the local currency for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrencyLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "ja-JP")]
    JaJp,
}

impl CurrencyLocale {
    pub fn all() -> &'static [CurrencyLocale] {
        &[
            CurrencyLocale::EnUs,
            CurrencyLocale::EnGb,
            CurrencyLocale::EnIn,
            CurrencyLocale::DeDe,
            CurrencyLocale::FrFr,
            CurrencyLocale::JaJp,
        ]
    }

    /// BCP-47 tag for the locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
        }
    }

    pub fn to_icu_locale(&self) -> Locale {
        match self {
            Self::EnUs => locale!("en-US"),
            Self::EnGb => locale!("en-GB"),
            Self::EnIn => locale!("en-IN"),
            Self::DeDe => locale!("de-DE"),
            Self::FrFr => locale!("fr-FR"),
            Self::JaJp => locale!("ja-JP"),
        }
    }

    /// ISO 4217 code of the locale's currency.
    pub fn currency_code(&self) -> &'static str {
        match self {
            Self::EnUs => "USD",
            Self::EnGb => "GBP",
            Self::EnIn => "INR",
            Self::DeDe | Self::FrFr => "EUR",
            Self::JaJp => "JPY",
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Self::EnUs => "$",
            Self::EnGb => "£",
            Self::EnIn => "₹",
            Self::DeDe | Self::FrFr => "€",
            Self::JaJp => "￥",
        }
    }

    pub fn symbol_placement(&self) -> SymbolPlacement {
        match self {
            Self::DeDe | Self::FrFr => SymbolPlacement::Suffix,
            Self::EnUs | Self::EnGb | Self::EnIn | Self::JaJp => SymbolPlacement::Prefix,
        }
    }

    /// Number of minor-unit digits shown for the currency.
    pub fn fraction_digits(&self) -> u32 {
        match self {
            Self::JaJp => 0,
            _ => 2,
        }
    }

    /// Resolves the locale from the process environment.
    ///
    /// Consults `LC_ALL`, `LC_MONETARY` and `LANG` in that order. The first
    /// non-empty value decides; `C`, `POSIX`, no value at all, or a locale
    /// without currency support fall back to [`CurrencyLocale::EnUs`].
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`CurrencyLocale::from_env`] with an injectable variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some((key, value)) = LOCALE_ENV_VARS.iter().find_map(|key| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (*key, value))
        }) else {
            debug!("no locale in environment, using {}", Self::default());
            return Self::default();
        };

        if matches!(value.trim(), "C" | "POSIX") || value.trim().starts_with("C.") {
            debug!(%key, %value, "portable locale, using {}", Self::default());
            return Self::default();
        }

        value.parse().unwrap_or_else(|e| {
            warn!(%key, "{e}, using {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for CurrencyLocale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyLocale {
    type Err = LocaleError;

    /// Accepts BCP-47 tags (`en-US`), POSIX names (`en_US.UTF-8`,
    /// `de_DE@euro`) and bare languages (`de`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-")
            .to_ascii_lowercase();

        match tag.as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "en-in" => Ok(Self::EnIn),
            "de-de" | "de" => Ok(Self::DeDe),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            "ja-jp" | "ja" => Ok(Self::JaJp),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}
