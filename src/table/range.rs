use crate::helpers::string::normalize;

/// A run of contiguous columns owned by one marker value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Normalized marker value, empty for the anonymous region of blank marker cells
    pub marker: String,
    /// First column (0-based, inclusive)
    pub col_lower_bound: usize,
    /// Last column (0-based, inclusive)
    pub col_upper_bound: usize,
}

impl Region {
    /// Returns true if this region comes from blank marker cells.
    pub fn is_anonymous(&self) -> bool {
        self.marker.is_empty()
    }

    pub fn width(&self) -> usize {
        self.col_upper_bound - self.col_lower_bound + 1
    }

    /// Cell of `row` inside this region at offset `index`, empty when the row is short.
    pub fn cell<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(self.col_lower_bound + index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Splits a marker row into regions, starting a new region wherever the marker changes.
pub fn regions(marker_row: &[String]) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();
    for (col, marker) in marker_row.iter().map(|marker| normalize(marker)).enumerate() {
        match regions.last_mut() {
            Some(region) if region.marker == marker => region.col_upper_bound = col,
            _ => regions.push(Region {
                marker,
                col_lower_bound: col,
                col_upper_bound: col,
            }),
        }
    }
    regions
}
