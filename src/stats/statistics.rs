//! Row and column statistics.

use foldhash::{HashSet, HashSetExt};

use super::type_detection::{infer_column_type, is_null_value};
use crate::field_type::Type;
use crate::table::Table;

/// Per-column statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStats {
    /// Header name of the column.
    pub name: String,
    /// Number of null (blank after trimming) fields.
    pub null_count: usize,
    /// Inferred type label.
    pub data_type: Type,
    /// Number of distinct trimmed values; all nulls count as one value.
    pub unique_values: usize,
}

/// Statistics over the well-formed rows of a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Data rows matching the header width.
    pub row_count: usize,
    /// Header width.
    pub column_count: usize,
    /// Rows repeating an earlier row's exact content.
    pub duplicate_rows: usize,
    /// Mismatched rows left out of every figure above.
    pub excluded_rows: usize,
    /// One entry per header column, in order.
    pub columns: Vec<ColumnStats>,
}

/// Compute statistics for `table`, ignoring rows of the wrong width.
pub fn compute_statistics(table: &Table) -> Statistics {
    let rows: Vec<&[String]> = table.valid_rows().map(Vec::as_slice).collect();

    let columns = table
        .header
        .iter()
        .enumerate()
        .map(|(idx, name)| column_stats(name, &rows, idx))
        .collect();

    Statistics {
        row_count: rows.len(),
        column_count: table.width(),
        duplicate_rows: count_duplicates(&rows),
        excluded_rows: table.num_rows() - rows.len(),
        columns,
    }
}

/// Every row beyond the first occurrence of its content counts once.
pub fn count_duplicates(rows: &[&[String]]) -> usize {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.iter().filter(|row| !seen.insert(**row)).count()
}

fn column_stats(name: &str, rows: &[&[String]], idx: usize) -> ColumnStats {
    let mut null_count = 0;
    let mut distinct: HashSet<&str> = HashSet::new();

    for row in rows {
        let value = row[idx].as_str();
        if is_null_value(value) {
            null_count += 1;
        }
        distinct.insert(value.trim());
    }

    ColumnStats {
        name: name.to_string(),
        null_count,
        data_type: infer_column_type(rows.iter().map(|row| row[idx].as_str())),
        unique_values: distinct.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::table::parse_table;

    fn stats_for(data: &str) -> Statistics {
        compute_statistics(&parse_table(data, &Dialect::default()).unwrap())
    }

    #[test]
    fn test_counts() {
        let stats = stats_for("a,b,c\n1,x,true\n2,y,false\n3,z,true\n");
        assert_eq!(stats.row_count, 3);
        assert_eq!(stats.column_count, 3);
        assert_eq!(stats.duplicate_rows, 0);
        assert_eq!(stats.excluded_rows, 0);
        assert_eq!(stats.columns[2].unique_values, 2);
    }

    #[test]
    fn test_duplicates() {
        let stats = stats_for("a,b\n1,2\n1,2\n1,2\n");
        assert_eq!(stats.row_count, 3);
        assert_eq!(stats.duplicate_rows, 2);

        let stats = stats_for("a,b\n1,2\n3,4\n1,2\n3,4\n5,6\n");
        assert_eq!(stats.duplicate_rows, 2);
    }

    #[test]
    fn test_duplicates_compare_untrimmed() {
        let stats = stats_for("a,b\n1,2\n1 ,2\n");
        assert_eq!(stats.duplicate_rows, 0);
    }

    #[test]
    fn test_nulls_and_uniques() {
        let stats = stats_for("v\n\"\"\n\" \"\nx\n");
        let col = &stats.columns[0];
        assert_eq!(col.null_count, 2);
        // "" and " " trim to the same null value
        assert_eq!(col.unique_values, 2);
        assert_eq!(col.data_type, Type::String);
    }

    #[test]
    fn test_types() {
        let stats = stats_for("i,f,b,s,e\n1,1,true,1,\n2,2.5,false,abc,\n3,3,TRUE,2, \n");
        let types: Vec<Type> = stats.columns.iter().map(|c| c.data_type).collect();
        assert_eq!(
            types,
            vec![
                Type::Integer,
                Type::Float,
                Type::Boolean,
                Type::String,
                Type::Empty
            ]
        );
    }

    #[test]
    fn test_mismatched_rows_excluded() {
        let stats = stats_for("a,b,c\n1,2\n1,2,3\n1,2,3,4\n");
        assert_eq!(stats.row_count, 1);
        assert_eq!(stats.column_count, 3);
        assert_eq!(stats.excluded_rows, 2);
        assert!(stats.columns.iter().all(|c| c.unique_values == 1));
    }

    #[test]
    fn test_header_only() {
        let stats = stats_for("a,b\n");
        assert_eq!(stats.row_count, 0);
        assert_eq!(stats.column_count, 2);
        assert!(stats.columns.iter().all(|c| c.data_type == Type::Empty));
        assert!(stats.columns.iter().all(|c| c.unique_values == 0));
    }
}
