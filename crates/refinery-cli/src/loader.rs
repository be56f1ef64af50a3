//! Delimited file loading and writing.
//!
//! Every cell is loaded as text; empty cells become missing values. Output
//! reuses the input's delimiter.

use std::fs;
use std::path::Path;

use refinery::Column;

use crate::error::{CliError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Non-blank lines inspected when detecting the delimiter.
const SAMPLE_LINES: usize = 10;

/// A loaded table held column by column.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
    delimiter: u8,
}

impl Table {
    /// Load a CSV/TSV file, detecting the delimiter.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| CliError::io(path, e))?;

        let delimiter = detect_delimiter(&contents)?;
        let table = Self::parse_bytes(&contents, delimiter)?;

        tracing::info!(
            path = %path.display(),
            delimiter = %(delimiter as char).escape_default(),
            rows = table.rows,
            columns = table.columns.len(),
            "Loaded table"
        );
        Ok(table)
    }

    /// Parse bytes with a known delimiter.
    pub fn parse_bytes(bytes: &[u8], delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(CliError::EmptyData("No columns found".to_string()));
        }

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        let mut rows = 0;
        for result in reader.records() {
            let record = result?;
            // Short rows are padded with missing values, long rows truncated
            for (i, column) in cells.iter_mut().enumerate() {
                let cell = record.get(i).filter(|c| !c.is_empty()).map(str::to_string);
                column.push(cell);
            }
            rows += 1;
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| Column::text(name, values))
            .collect();

        Ok(Self {
            columns,
            rows,
            delimiter,
        })
    }

    /// Column names in order.
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Index of the column with the given name.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| CliError::ColumnNotFound {
                column: name.to_string(),
                available: self.headers(),
            })
    }

    /// Borrow a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        let index = self.position(name)?;
        Ok(&self.columns[index])
    }

    /// Replace the column at `index`.
    pub fn replace(&mut self, index: usize, column: Column) {
        debug_assert_eq!(column.len(), self.rows);
        self.columns[index] = column;
    }

    /// Rename every column, in order.
    pub fn rename_all(&mut self, names: &[String]) {
        debug_assert_eq!(names.len(), self.columns.len());
        for (column, name) in self.columns.iter_mut().zip(names) {
            *column = column.renamed(name.as_str());
        }
    }

    /// Write the table, rendering missing values as empty cells.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|e| CliError::io(path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(file);

        writer.write_record(self.columns.iter().map(Column::name))?;
        for row in 0..self.rows {
            writer.write_record(
                self.columns
                    .iter()
                    .map(|c| c.get(row).map(|v| v.to_string()).unwrap_or_default()),
            )?;
        }
        writer.flush().map_err(|e| CliError::io(path, e))?;

        tracing::info!(path = %path.display(), rows = self.rows, "Wrote table");
        Ok(())
    }
}

/// Pick the delimiter whose count on the header line is repeated by the most
/// sampled lines, then the one producing more fields. Earlier entries of
/// [`DELIMITERS`] win ties.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let sample: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let Some(header) = sample.first() else {
        return Err(CliError::EmptyData("No lines to analyze".to_string()));
    };

    let mut best: Option<(u8, (usize, usize))> = None;
    for &delimiter in DELIMITERS {
        let expected = count_unquoted(header, delimiter);
        if expected == 0 {
            continue;
        }
        let agreeing = sample
            .iter()
            .filter(|line| count_unquoted(line, delimiter) == expected)
            .count();
        let score = (agreeing, expected);

        if best.is_none_or(|(_, top)| score > top) {
            best = Some((delimiter, score));
        }
    }

    Ok(best.map_or(b',', |(delimiter, _)| delimiter))
}

/// Occurrences of `delimiter` outside double-quoted sections.
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    line.split('"')
        .step_by(2)
        .map(|segment| segment.bytes().filter(|&b| b == delimiter).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use refinery::{ElementKind, Value};
    use tempfile::NamedTempFile;

    use super::*;

    fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(b"a,b,c\n1,2,3\n4,5,6").unwrap(), b',');
        assert_eq!(detect_delimiter(b"a\tb\tc\n1\t2\t3").unwrap(), b'\t');
        assert_eq!(detect_delimiter(b"a;b\n1;2").unwrap(), b';');
        assert_eq!(detect_delimiter(b"a|b\n1|2").unwrap(), b'|');
        assert_eq!(detect_delimiter(b"\"x,y\";z\n\"1,2\";3").unwrap(), b';');
        assert!(detect_delimiter(b"\n  \n").is_err());
    }

    #[test]
    fn test_detect_prefers_consistent_delimiter() {
        // Commas inside values vary per line; the tab count does not
        let tsv = b"name\tnote\nAda\thello, world\nBob\ta, b, c\n";
        assert_eq!(detect_delimiter(tsv).unwrap(), b'\t');
        assert_eq!(detect_delimiter(b"single column\nvalue").unwrap(), b',');
    }

    #[test]
    fn test_count_unquoted() {
        assert_eq!(count_unquoted("a,\"b,c\",d", b','), 2);
        assert_eq!(count_unquoted("\"x;y\"", b';'), 0);
        assert_eq!(count_unquoted("", b','), 0);
    }

    #[test]
    fn test_parse_into_text_columns() {
        let table = Table::parse_bytes(b"name,age\nAlice,30\nBob,\nCarol", b',').unwrap();

        assert_eq!(table.headers(), vec!["name", "age"]);
        assert_eq!(table.row_count(), 3);

        let age = table.column("age").unwrap();
        assert_eq!(age.kind(), ElementKind::Text);
        assert_eq!(age.values(), &[Value::Text("30".to_string()), Value::Null, Value::Null]);
    }

    #[test]
    fn test_missing_column_lists_available() {
        let table = Table::parse_bytes(b"a,b\n1,2", b',').unwrap();
        let err = table.column("c").unwrap_err();
        assert_eq!(err.to_string(), "Column 'c' not found. Available columns: a, b");
    }

    #[test]
    fn test_load_and_write_round_trip() {
        let input = create_test_file("id\tstate\n1\tny\n2\t\n", ".tsv");
        let mut table = Table::load(input.path()).unwrap();
        assert_eq!(table.delimiter(), b'\t');

        let index = table.position("state").unwrap();
        let codes = Column::text("state", vec![Some("NY"), None]);
        table.replace(index, codes);
        table.rename_all(&["ID".to_string(), "STATE".to_string()]);

        let output = NamedTempFile::with_suffix(".tsv").unwrap();
        table.write(output.path()).unwrap();

        let written = fs::read_to_string(output.path()).unwrap();
        assert_eq!(written, "ID\tSTATE\n1\tNY\n2\t\n");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Table::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
