//! # Logical Tables
//!
//! A single published sheet carries several tables side by side. The first grid row
//! names the owning table of every column, the second row holds each table's headers.
use crate::table::record::Record;

pub mod column;
pub mod demux;
pub mod range;
pub mod record;

/// Tables the pipeline knows how to consume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Bar,
    Kitchen,
    Timeslots,
    Content,
    Categories,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::Bar,
        TableKind::Kitchen,
        TableKind::Timeslots,
        TableKind::Content,
        TableKind::Categories,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TableKind::Bar => "bar",
            TableKind::Kitchen => "kitchen",
            TableKind::Timeslots => "timeslots",
            TableKind::Content => "content",
            TableKind::Categories => "categories",
        }
    }

    /// Parses a normalized marker value; unknown markers yield `None`.
    pub fn parse(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == marker)
    }
}

/// Records of every known table, empty for tables absent from the sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tables {
    pub bar: Vec<Record>,
    pub kitchen: Vec<Record>,
    pub timeslots: Vec<Record>,
    pub content: Vec<Record>,
    pub categories: Vec<Record>,
}

impl Tables {
    pub fn get(&self, kind: TableKind) -> &[Record] {
        match kind {
            TableKind::Bar => &self.bar,
            TableKind::Kitchen => &self.kitchen,
            TableKind::Timeslots => &self.timeslots,
            TableKind::Content => &self.content,
            TableKind::Categories => &self.categories,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: TableKind) -> &mut Vec<Record> {
        match kind {
            TableKind::Bar => &mut self.bar,
            TableKind::Kitchen => &mut self.kitchen,
            TableKind::Timeslots => &mut self.timeslots,
            TableKind::Content => &mut self.content,
            TableKind::Categories => &mut self.categories,
        }
    }
}
