//! Structural (column alignment) verdict.

use crate::table::{MismatchRecord, Table};

/// Whether a table is well-formed, and why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralVerdict {
    /// True iff there are no mismatched rows and the header is non-empty.
    pub well_formed: bool,
    /// Human-readable explanation.
    pub details: String,
}

impl StructuralVerdict {
    /// Verdict for a file without a single record.
    pub fn empty_file() -> Self {
        Self {
            well_formed: false,
            details: "Empty CSV file".to_string(),
        }
    }
}

/// Judge the column alignment of `table`.
pub fn validate_structure(table: &Table) -> StructuralVerdict {
    judge(table.width(), &table.mismatches)
}

fn judge(width: usize, mismatches: &[MismatchRecord]) -> StructuralVerdict {
    if width == 0 {
        return StructuralVerdict::empty_file();
    }

    match mismatches {
        [] => StructuralVerdict {
            well_formed: true,
            details: "CSV format is valid".to_string(),
        },
        [only] => StructuralVerdict {
            well_formed: false,
            details: format!("Inconsistent number of columns in row {}", only.row),
        },
        [first, ..] => StructuralVerdict {
            well_formed: false,
            details: format!(
                "Inconsistent number of columns in {} rows (first at row {})",
                mismatches.len(),
                first.row
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::table::parse_table;

    #[test]
    fn test_well_formed() {
        let table = parse_table("a,b\n1,2\n", &Dialect::default()).unwrap();
        let verdict = validate_structure(&table);
        assert!(verdict.well_formed);
        assert_eq!(verdict.details, "CSV format is valid");
    }

    #[test]
    fn test_single_mismatch() {
        let table = parse_table("a,b\n1,2\n3\n", &Dialect::default()).unwrap();
        let verdict = validate_structure(&table);
        assert!(!verdict.well_formed);
        assert_eq!(verdict.details, "Inconsistent number of columns in row 3");
    }

    #[test]
    fn test_several_mismatches() {
        let table = parse_table("a,b,c\n1,2\n1,2,3,4\n", &Dialect::default()).unwrap();
        let verdict = validate_structure(&table);
        assert!(!verdict.well_formed);
        assert_eq!(
            verdict.details,
            "Inconsistent number of columns in 2 rows (first at row 2)"
        );
    }

    #[test]
    fn test_zero_width() {
        let verdict = validate_structure(&Table::new());
        assert_eq!(verdict, StructuralVerdict::empty_file());
    }
}
