//! CSV parsing into a header plus positional rows.

use crate::dialect::Dialect;
use crate::error::Result;

/// A data row whose field count differs from the header width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MismatchRecord {
    /// 1-based record number, the header being record 1.
    pub row: usize,
    /// Physical line on which the record starts.
    pub line: u64,
    /// Number of fields actually found.
    pub fields: usize,
}

/// A parsed CSV table.
///
/// Mismatched rows are kept in `rows`; use [`Table::valid_rows`] for the
/// subset matching the header width.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Header fields (first record).
    pub header: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<Vec<String>>,
    /// Rows whose width differs from the header's.
    pub mismatches: Vec<MismatchRecord>,
}

impl Table {
    /// Create a new empty table.
    pub const fn new() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    /// Expected number of fields per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Returns true if the file had no records at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Returns the number of data rows, mismatched ones included.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Data rows whose width matches the header.
    pub fn valid_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        let width = self.width();
        self.rows.iter().filter(move |row| row.len() == width)
    }
}

/// Parse UTF-8 text into a table using the given dialect.
///
/// The first record becomes the header. Every later record is kept; those
/// with a different field count are also logged as [`MismatchRecord`]s.
pub fn parse_table(text: &str, dialect: &Dialect) -> Result<Table> {
    let mut reader = dialect.reader_builder().from_reader(text.as_bytes());
    let mut table = Table::new();
    let mut record = csv::StringRecord::new();
    let mut record_number = 0usize;

    while reader.read_record(&mut record)? {
        record_number += 1;
        let row: Vec<String> = record
            .iter()
            .map(std::string::ToString::to_string)
            .collect();

        if record_number == 1 {
            table.header = row;
            continue;
        }

        if row.len() != table.width() {
            table.mismatches.push(MismatchRecord {
                row: record_number,
                line: record.position().map_or(0, csv::Position::line),
                fields: row.len(),
            });
        }
        table.rows.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Quote;

    #[test]
    fn test_parse_simple_csv() {
        let table = parse_table("a,b,c\n1,2,3\n4,5,6\n", &Dialect::default()).unwrap();
        assert_eq!(table.header, vec!["a", "b", "c"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.width(), 3);
        assert!(table.mismatches.is_empty());
    }

    #[test]
    fn test_parse_quoted_csv() {
        let data = "\"a,b\",c\n\"multi\nline\",\"say \"\"hi\"\"\"\n";
        let table = parse_table(data, &Dialect::default()).unwrap();
        assert_eq!(table.header, vec!["a,b", "c"]);
        assert_eq!(table.rows[0], vec!["multi\nline", "say \"hi\""]);
        assert!(table.mismatches.is_empty());
    }

    #[test]
    fn test_mismatches_are_kept() {
        let data = "a,b,c\n1,2\n1,2,3\n1,2,3,4\n";
        let table = parse_table(data, &Dialect::default()).unwrap();

        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.valid_rows().count(), 1);
        assert_eq!(
            table.mismatches,
            vec![
                MismatchRecord {
                    row: 2,
                    line: 2,
                    fields: 2
                },
                MismatchRecord {
                    row: 4,
                    line: 4,
                    fields: 4
                },
            ]
        );
    }

    #[test]
    fn test_line_tracks_embedded_newlines() {
        let data = "a,b\n\"x\ny\",1\n2\n";
        let table = parse_table(data, &Dialect::default()).unwrap();
        assert_eq!(table.mismatches.len(), 1);
        assert_eq!(table.mismatches[0].row, 3);
        assert_eq!(table.mismatches[0].line, 4);
    }

    #[test]
    fn test_custom_dialect() {
        let dialect = Dialect::new(b';', Quote::None);
        let table = parse_table("a;b\n\"1;2\n", &dialect).unwrap();
        assert_eq!(table.rows[0], vec!["\"1", "2"]);
    }

    #[test]
    fn test_parse_empty() {
        let table = parse_table("", &Dialect::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
    }
}
