//! Keyword translation between the sheet's authoring language and the canonical
//! (English) vocabulary used by the pipeline.
use crate::config::CANONICAL_LANGUAGE;
use crate::helpers::string::normalize;
use crate::table::column::Column;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::HashMap;
use tracing::warn;

/// Keywords of one authoring language, keyed by their canonical form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeywordCatalog {
    /// Column names, e.g. `"price" -> "prezzo"`
    pub columns: BTreeMap<String, String>,
    /// Boolean and value tokens, e.g. `"vegan" -> "vegano"`
    pub values: BTreeMap<String, String>,
    /// Row type tokens of the `type` column
    pub types: BTreeMap<String, String>,
    /// Weekday tokens of the `day` column
    pub days: BTreeMap<String, String>,
}

/// Authored -> canonical lookups built from a [`KeywordCatalog`].
#[derive(Clone, Debug, Default)]
struct ReverseCatalog {
    columns: HashMap<String, String>,
    values: HashMap<String, String>,
    types: HashMap<String, String>,
    days: HashMap<String, String>,
}

/// Inverts a canonical -> authored map, normalizing both sides.
fn reverse(keywords: &BTreeMap<String, String>) -> HashMap<String, String> {
    keywords
        .iter()
        .map(|(canonical, authored)| (normalize(authored), normalize(canonical)))
        .filter(|(authored, _)| !authored.is_empty())
        .collect()
}

impl From<&KeywordCatalog> for ReverseCatalog {
    fn from(catalog: &KeywordCatalog) -> Self {
        ReverseCatalog {
            columns: reverse(&catalog.columns),
            values: reverse(&catalog.values),
            types: reverse(&catalog.types),
            days: reverse(&catalog.days),
        }
    }
}

/// Translates headers and cell values of a sheet into the canonical vocabulary.
///
/// Keywords missing from the catalog pass through unchanged, so a partially
/// localized sheet still loads.
#[derive(Clone, Debug, Default)]
pub struct KeywordTranslator {
    reverse: Option<ReverseCatalog>,
}

impl KeywordTranslator {
    /// Creates a translator for `language`. The canonical language, or a language
    /// without catalog, yields the identity translator.
    pub fn new(language: &str, catalog: Option<&KeywordCatalog>) -> Self {
        if language.eq_ignore_ascii_case(CANONICAL_LANGUAGE) {
            return Self::identity();
        }
        match catalog {
            Some(catalog) => KeywordTranslator {
                reverse: Some(ReverseCatalog::from(catalog)),
            },
            None => {
                warn!(language, "no keyword catalog for sheet language, keywords are read as-is");
                Self::identity()
            }
        }
    }

    pub fn identity() -> Self {
        KeywordTranslator { reverse: None }
    }

    pub fn is_identity(&self) -> bool {
        self.reverse.is_none()
    }

    /// Canonical name of a header cell.
    pub fn column(&self, header: &str) -> String {
        let header = normalize(header);
        self.reverse
            .as_ref()
            .and_then(|reverse| reverse.columns.get(&header))
            .cloned()
            .unwrap_or(header)
    }

    /// Canonical form of a cell value found under `column`.
    ///
    /// Value tokens are translated in every column; type tokens only under `type`
    /// and weekday tokens only under `day`.
    pub fn value(&self, column: &Column, value: &str) -> String {
        let Some(reverse) = &self.reverse else {
            return value.to_owned();
        };
        if value.is_empty() {
            return String::new();
        }
        let key = normalize(value);
        let mut translated = reverse.values.get(&key).cloned();
        let specific = match column {
            Column::Type => reverse.types.get(&key),
            Column::Day => reverse.days.get(&key),
            _ => None,
        };
        if let Some(specific) = specific {
            translated = Some(specific.to_owned());
        }
        translated.unwrap_or_else(|| value.to_owned())
    }
}
