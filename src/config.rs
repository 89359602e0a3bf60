//! # Configuration
//!
//! Process-wide settings loaded once at startup from a JSON document and treated as
//! read-only afterwards. The configuration is passed explicitly to every pipeline
//! stage; nothing in the crate keeps catalogs in global state.
use crate::error::MenuSheetError;
use crate::error::ResultMessage;
use crate::i18n::LanguageChain;
use crate::spreadsheet::keyword::KeywordCatalog;
use crate::spreadsheet::keyword::KeywordTranslator;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Language of the canonical keyword vocabulary.
pub const CANONICAL_LANGUAGE: &str = "en";

/// Errors raised while loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration document: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Allergen code {0} is used more than once")]
    DuplicateAllergenCode(u32),

    #[error("Allergen '{0}' has no column")]
    MissingAllergenColumn(String),
}

/// Decimal separator convention used by numeric cells in the sheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// `12.50`
    #[default]
    #[serde(rename = "us", alias = "dot")]
    Dot,
    /// `12,50`
    #[serde(rename = "it", alias = "comma")]
    Comma,
}

/// How the source sheet is authored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputSettings {
    /// Language the sheet keywords are written in
    pub csv_language: String,
    /// Decimal separator of numeric and time cells
    pub csv_number_format: NumberFormat,
}

impl Default for InputSettings {
    fn default() -> Self {
        InputSettings {
            csv_language: CANONICAL_LANGUAGE.to_owned(),
            csv_number_format: NumberFormat::default(),
        }
    }
}

/// Locale and currency used when presenting prices.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalSettings {
    pub locale: String,
    pub currency: String,
    pub currency_symbol: String,
}

impl Default for RegionalSettings {
    fn default() -> Self {
        RegionalSettings {
            locale: "it-IT".to_owned(),
            currency: "EUR".to_owned(),
            currency_symbol: "€".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub fallback_language: String,
}

impl Default for I18nSettings {
    fn default() -> Self {
        I18nSettings {
            fallback_language: CANONICAL_LANGUAGE.to_owned(),
        }
    }
}

/// Where the sheet text comes from.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UrlSettings {
    /// Published sheet URL (or local path)
    pub menu: Option<String>,
    /// Local copy used when the published sheet cannot be fetched
    pub fallback: Option<PathBuf>,
}

/// One entry of the allergen catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllergenSpec {
    /// Stable key used by filters and translations
    pub key: String,
    /// Regulatory number, defines display order
    pub code: u32,
    #[serde(default)]
    pub icon: String,
    /// Canonical name of the boolean column flagging the allergen
    pub column: String,
}

/// One entry of the diet/food-type catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodType {
    pub id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub label_key: Option<String>,
}

/// Top-level configuration document.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub regional: RegionalSettings,
    #[serde(default)]
    pub i18n: I18nSettings,
    #[serde(default)]
    pub urls: UrlSettings,
    pub allergens: Vec<AllergenSpec>,
    #[serde(default)]
    pub food_types: Vec<FoodType>,
    /// Keyword catalogs keyed by authoring language
    #[serde(default)]
    pub keywords: HashMap<String, KeywordCatalog>,
}

impl Config {
    /// Reads and validates a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, MenuSheetError> {
        let name = path.as_ref().to_string_lossy().to_string();
        let load = || -> Result<Config, MenuSheetError> {
            let text = fs::read_to_string(path.as_ref())?;
            Ok(Config::from_json(&text)?)
        };
        load().with_prefix(&name)
    }

    /// Parses and validates a configuration document.
    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut codes = HashSet::new();
        for allergen in &self.allergens {
            if allergen.column.trim().is_empty() {
                Err(ConfigError::MissingAllergenColumn(allergen.key.to_owned()))?;
            }
            if !codes.insert(allergen.code) {
                Err(ConfigError::DuplicateAllergenCode(allergen.code))?;
            }
        }
        Ok(())
    }

    /// Builds the keyword translator for the configured authoring language.
    /// Catalog keys match the language case-insensitively.
    pub fn translator(&self) -> KeywordTranslator {
        let language = self.input.csv_language.trim().to_lowercase();
        let catalog = self
            .keywords
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(&language))
            .map(|(_, catalog)| catalog);
        KeywordTranslator::new(&language, catalog)
    }

    /// Language chain for a reader who prefers `language`.
    pub fn language_chain(&self, language: &str) -> LanguageChain {
        LanguageChain::new([
            language,
            self.i18n.fallback_language.as_str(),
            CANONICAL_LANGUAGE,
        ])
    }

    /// Looks up a food type by id.
    pub fn food_type(&self, id: &str) -> Option<&FoodType> {
        self.food_types.iter().find(|food_type| food_type.id == id)
    }
}
