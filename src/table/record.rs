use crate::helpers::string::is_blank;
use crate::helpers::string::is_truthy;
use crate::i18n::Localized;
use crate::table::column::Column;
use std::collections::HashMap;

/// One data row of a logical table, keyed by canonical column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<Column, String>,
}

impl Record {
    pub fn insert(&mut self, column: Column, value: String) {
        self.values.insert(column, value);
    }

    /// Cell value under `column`, empty when the column is absent.
    pub fn get(&self, column: &Column) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Trimmed cell value, `None` when absent or blank.
    pub fn non_blank(&self, column: &Column) -> Option<&str> {
        Some(self.get(column).trim()).filter(|value| !value.is_empty())
    }

    pub fn is_truthy(&self, column: &Column) -> bool {
        is_truthy(self.get(column))
    }

    /// Returns true if at least one cell holds something other than whitespace.
    pub fn has_data(&self) -> bool {
        self.values.values().any(|value| !is_blank(value))
    }

    /// Gathers the localized columns accepted by `select` into one value.
    pub fn localized<F>(&self, select: F) -> Localized
    where
        F: Fn(&Column) -> bool,
    {
        let mut localized = Localized::default();
        for (column, value) in &self.values {
            if let Some(language) = column.language().filter(|_| select(column)) {
                localized.insert(language, value);
            }
        }
        localized
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for Record {
    /// Builds a record from canonical column names, mostly for fixtures.
    fn from(cells: [(&'a str, &'a str); N]) -> Self {
        let mut record = Record::default();
        for (name, value) in cells {
            record.insert(Column::parse(name), value.to_owned());
        }
        record
    }
}
