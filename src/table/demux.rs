use crate::spreadsheet::keyword::KeywordTranslator;
use crate::spreadsheet::tokenizer::Grid;
use crate::table::column::Column;
use crate::table::range::regions;
use crate::table::record::Record;
use crate::table::TableKind;
use crate::table::Tables;
use tracing::debug;

/// Grid row holding the table markers.
const MARKER_ROW: usize = 0;
/// Grid row holding the column headers.
const HEADER_ROW: usize = 1;
/// First grid row holding data.
const FIRST_DATA_ROW: usize = 2;

/// Splits a multi-table grid into the records of each known table.
///
/// Columns are assigned to tables by the marker row. Rows that are blank within a
/// table's columns are dropped, so tables of different lengths can share the grid.
/// Regions with unknown or blank markers are ignored.
pub fn demultiplex(grid: &Grid, translator: &KeywordTranslator) -> Tables {
    let mut tables = Tables::default();
    if grid.len() <= FIRST_DATA_ROW {
        debug!(rows = grid.len(), "sheet has no data rows");
        return tables;
    }

    let headers = translate_headers(&grid[HEADER_ROW], translator);
    for region in regions(&grid[MARKER_ROW]) {
        let Some(kind) = TableKind::parse(&region.marker) else {
            if !region.is_anonymous() {
                debug!(marker = %region.marker, "ignoring unknown table marker");
            }
            continue;
        };
        let columns = (region.col_lower_bound..=region.col_upper_bound)
            .map_while(|col| headers.get(col))
            .collect::<Vec<_>>();
        let records = tables.get_mut(kind);
        for row in &grid[FIRST_DATA_ROW..] {
            let cells = (0..columns.len()).map(|index| region.cell(row, index));
            if let Some(record) = build_record(columns.iter().copied(), cells, translator) {
                records.push(record);
            }
        }
    }

    for kind in TableKind::ALL {
        debug!(table = kind.as_str(), records = tables.get(kind).len(), "table extracted");
    }
    tables
}

/// Reads a grid holding one table: the first row is the header row and only rows
/// with more than one cell are data rows.
pub fn single_table(grid: &Grid, translator: &KeywordTranslator) -> Vec<Record> {
    let Some((header_row, rows)) = grid.split_first() else {
        return Vec::new();
    };
    let headers = translate_headers(header_row, translator);
    rows.iter()
        .filter(|row| row.len() > 1)
        .filter_map(|row| {
            let cells = (0..headers.len()).map(|index| row.get(index).map(String::as_str).unwrap_or(""));
            build_record(headers.iter(), cells, translator)
        })
        .collect()
}

fn translate_headers(header_row: &[String], translator: &KeywordTranslator) -> Vec<Column> {
    header_row
        .iter()
        .map(|header| Column::parse(&translator.column(header)))
        .collect()
}

/// Zips headers with cells, translating values. Returns `None` for blank rows.
fn build_record<'c, 'v, C, V>(columns: C, cells: V, translator: &KeywordTranslator) -> Option<Record>
where
    C: Iterator<Item = &'c Column>,
    V: Iterator<Item = &'v str>,
{
    let mut record = Record::default();
    for (column, value) in columns.zip(cells) {
        let value = translator.value(column, value);
        record.insert(column.to_owned(), value);
    }
    Some(record).filter(Record::has_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::keyword::KeywordCatalog;
    use crate::spreadsheet::tokenizer::tokenize;
    use std::collections::BTreeMap;

    const SHEET: &str = "\
bar,bar,kitchen,kitchen,kitchen
name_en,price,name_en,price,active
Beer,5,Pasta,12,x
Wine,6,,,
,,Soup,8,1
";

    #[test]
    fn columns_never_leak_between_tables() {
        let tables = demultiplex(&tokenize(SHEET), &KeywordTranslator::identity());
        assert_eq!(tables.bar.len(), 2);
        assert_eq!(tables.kitchen.len(), 2);
        for record in &tables.bar {
            assert_eq!(record.len(), 2);
            assert!(record.non_blank(&Column::Active).is_none());
        }
        assert_eq!(tables.bar[0].get(&Column::Name("en".to_owned())), "Beer");
        assert_eq!(tables.bar[1].get(&Column::Price), "6");
        assert_eq!(tables.kitchen[0].get(&Column::Name("en".to_owned())), "Pasta");
        assert_eq!(tables.kitchen[1].get(&Column::Price), "8");
        assert_eq!(tables.kitchen[1].get(&Column::Active), "1");
    }

    #[test]
    fn absent_tables_are_empty() {
        let tables = demultiplex(&tokenize(SHEET), &KeywordTranslator::identity());
        assert!(tables.timeslots.is_empty());
        assert!(tables.content.is_empty());
        assert!(tables.categories.is_empty());
    }

    #[test]
    fn short_grids_yield_nothing() {
        let grid = tokenize("bar,bar\nname_en,price\n");
        assert_eq!(demultiplex(&grid, &KeywordTranslator::identity()), Tables::default());
        assert_eq!(demultiplex(&Vec::new(), &KeywordTranslator::identity()), Tables::default());
    }

    #[test]
    fn unknown_and_blank_markers_are_ignored() {
        let grid = tokenize("wine,,bar\nname_en,x,name_en\nMerlot,y,Beer\n");
        let tables = demultiplex(&grid, &KeywordTranslator::identity());
        assert_eq!(tables.bar.len(), 1);
        assert_eq!(tables.bar[0].len(), 1);
        assert_eq!(tables.bar[0].get(&Column::Name("en".to_owned())), "Beer");
    }

    #[test]
    fn repeated_marker_runs_both_contribute() {
        let grid = tokenize("bar,kitchen,bar\nname_en,name_en,price\nBeer,Pasta,5\n");
        let tables = demultiplex(&grid, &KeywordTranslator::identity());
        assert_eq!(tables.bar.len(), 2);
        assert_eq!(tables.bar[0].get(&Column::Name("en".to_owned())), "Beer");
        assert_eq!(tables.bar[1].get(&Column::Price), "5");
    }

    #[test]
    fn headers_and_values_are_translated() {
        let catalog = KeywordCatalog {
            columns: BTreeMap::from([
                ("day".to_owned(), "giorno".to_owned()),
                ("active".to_owned(), "attivo".to_owned()),
            ]),
            values: BTreeMap::from([("true".to_owned(), "vero".to_owned())]),
            types: BTreeMap::new(),
            days: BTreeMap::from([("tue".to_owned(), "mar".to_owned())]),
        };
        let translator = KeywordTranslator::new("it", Some(&catalog));
        let grid = tokenize("timeslots,timeslots\nGiorno,Attivo\nMar,VERO\n");
        let tables = demultiplex(&grid, &translator);
        assert_eq!(tables.timeslots[0].get(&Column::Day), "tue");
        assert_eq!(tables.timeslots[0].get(&Column::Active), "true");
    }

    #[test]
    fn single_table_sheet() {
        let grid = tokenize("Name_en,Price\nBeer,5\nlonely\n\nWine,6\n");
        let records = single_table(&grid, &KeywordTranslator::identity());
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get(&Column::Name("en".to_owned())), "Wine");
        assert!(single_table(&Vec::new(), &KeywordTranslator::identity()).is_empty());
    }
}
