//! # Menu Sheet
//!
//! Turns a restaurant menu maintained in a published spreadsheet (CSV export) into
//! structured menu data: categorized kitchen and bar menus, opening hours and
//! editorial content, ready to be rendered in any language.
//!
//! ## Features
//!
//! - **Multi-table sheets**: one sheet carries the `bar`, `kitchen`, `timeslots`,
//!   `content` and `categories` tables side by side, separated by a marker row
//! - **Localized authoring**: headers and keywords may be written in the staff's
//!   language and are translated to a canonical vocabulary through keyword catalogs
//! - **Tolerant parsing**: malformed quoting, blank rows, unknown columns and
//!   unparsable values degrade to defaults instead of failing the whole refresh
//! - **Dietary filters**: vegetarian/vegan restrictions and allergen exclusions
//! - **Opening hours**: consecutive days with the same hours are collapsed, and the
//!   current state (open now, opening in N minutes) is computed including slots that
//!   run past midnight
//!
//! ## Pipeline
//!
//! ```text
//! text -> tokenize -> demultiplex -> normalize (menu, schedule, content) -> MenuData
//! MenuData + reader preferences -> MenuView
//! ```
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod menu;
pub mod pipeline;
pub mod schedule;
pub mod spreadsheet;
pub mod table;
pub mod view;

pub use crate::config::Config;
pub use crate::error::MenuSheetError;
pub use crate::helpers::reader::MenuSource;
pub use crate::i18n::LanguageChain;
pub use crate::menu::filter::DietFilter;
pub use crate::menu::filter::FilterSpec;
pub use crate::pipeline::MenuData;
pub use crate::view::MenuView;
