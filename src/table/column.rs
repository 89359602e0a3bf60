use std::fmt::Display;

/// Canonical column names understood by the normalizers.
///
/// Localized columns carry their language code (`name_it` is `Name("it")`).
/// Catalog-driven columns such as allergen flags, and columns nobody reads,
/// are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Active,
    LastUpdated,
    Category,
    Type,
    Price,
    NoGlutenOption,
    Name(String),
    Description(String),
    Label(String),
    Text(String),
    Id,
    CategoryId,
    Order,
    SlotId,
    Day,
    Open,
    Close,
    IsKitchen,
    ShowInHero,
    ShowInInfo,
    Style,
    Link,
    Other(String),
}

impl Column {
    /// Parses a canonical (already translated) column name.
    pub fn parse(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "active" => Self::Active,
            "last_updated" => Self::LastUpdated,
            "category" => Self::Category,
            "type" => Self::Type,
            "price" => Self::Price,
            "no_gluten_option" => Self::NoGlutenOption,
            "id" => Self::Id,
            "category_id" => Self::CategoryId,
            "order" => Self::Order,
            "slot_id" => Self::SlotId,
            "day" => Self::Day,
            "open" => Self::Open,
            "close" => Self::Close,
            "is_kitchen" => Self::IsKitchen,
            "show_in_hero" => Self::ShowInHero,
            "show_in_info" => Self::ShowInInfo,
            "style" => Self::Style,
            "link" => Self::Link,
            _ => Self::parse_localized(&name).unwrap_or(Self::Other(name)),
        }
    }

    /// Parses `<prefix>_<language>` columns.
    fn parse_localized(name: &str) -> Option<Self> {
        let (prefix, language) = name.rsplit_once('_')?;
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let language = language.to_owned();
        match prefix {
            "name" => Some(Self::Name(language)),
            "description" => Some(Self::Description(language)),
            "label" => Some(Self::Label(language)),
            "text" => Some(Self::Text(language)),
            _ => None,
        }
    }

    /// Language code of a localized column.
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Name(language)
            | Self::Description(language)
            | Self::Label(language)
            | Self::Text(language) => Some(language),
            _ => None,
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::LastUpdated => write!(f, "last_updated"),
            Self::Category => write!(f, "category"),
            Self::Type => write!(f, "type"),
            Self::Price => write!(f, "price"),
            Self::NoGlutenOption => write!(f, "no_gluten_option"),
            Self::Name(language) => write!(f, "name_{language}"),
            Self::Description(language) => write!(f, "description_{language}"),
            Self::Label(language) => write!(f, "label_{language}"),
            Self::Text(language) => write!(f, "text_{language}"),
            Self::Id => write!(f, "id"),
            Self::CategoryId => write!(f, "category_id"),
            Self::Order => write!(f, "order"),
            Self::SlotId => write!(f, "slot_id"),
            Self::Day => write!(f, "day"),
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
            Self::IsKitchen => write!(f, "is_kitchen"),
            Self::ShowInHero => write!(f, "show_in_hero"),
            Self::ShowInInfo => write!(f, "show_in_info"),
            Self::Style => write!(f, "style"),
            Self::Link => write!(f, "link"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}
