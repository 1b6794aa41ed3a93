use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};

use crate::prelude::{SurveyError, SurveyResult};

/// Column separator used by a survey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// A single byte such as `,`, `|` or `&`.
    Char(u8),
    /// Runs of spaces and tabs.
    Whitespace,
}

/// Static data directory that relative survey paths resolve against.
#[derive(Debug, Clone)]
pub struct DataRoot {
    root: PathBuf,
}

impl DataRoot {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Load a delimited numeric table into a rows x columns array.
///
/// Everything from `comment` to the end of a line is ignored, and lines left
/// blank are skipped. Every data row must carry the same number of numeric
/// fields.
pub fn read_table(path: &Path, delimiter: Delimiter, comment: u8) -> SurveyResult<Array2<f64>> {
    let text = fs::read_to_string(path).map_err(|err| unavailable(path, err))?;
    let content = strip_comments(&text, char::from(comment));
    let rows = match delimiter {
        Delimiter::Char(byte) => read_delimited(path, &content, byte)?,
        Delimiter::Whitespace => read_whitespace(path, &content)?,
    };
    rows_to_array(path, rows)
}

/// Copy one column out of a loaded table.
pub fn select_column(table: &Array2<f64>, index: usize) -> SurveyResult<Array1<f64>> {
    if index >= table.ncols() {
        return Err(SurveyError::DataUnavailable(format!(
            "column {} requested from a table with {} columns",
            index,
            table.ncols()
        )));
    }
    Ok(table.column(index).to_owned())
}

fn unavailable(path: &Path, reason: impl std::fmt::Display) -> SurveyError {
    SurveyError::DataUnavailable(format!("{}: {}", path.display(), reason))
}

fn parse_field(path: &Path, line: usize, field: &str) -> SurveyResult<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| unavailable(path, format!("line {}: '{}' is not a number", line, field)))
}

/// Cut every line at its first comment marker, keeping line numbering intact.
fn strip_comments(text: &str, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    for raw in text.lines() {
        let content = match raw.find(marker) {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        out.push_str(content);
        out.push('\n');
    }
    out
}

fn read_delimited(path: &Path, content: &str, delimiter: u8) -> SurveyResult<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| unavailable(path, err))?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let row = record
            .iter()
            .map(|field| parse_field(path, line, field))
            .collect::<SurveyResult<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn read_whitespace(path: &Path, content: &str) -> SurveyResult<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|field| parse_field(path, idx + 1, field))
            .collect::<SurveyResult<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn rows_to_array(path: &Path, rows: Vec<Vec<f64>>) -> SurveyResult<Array2<f64>> {
    let width = match rows.first() {
        Some(first) => first.len(),
        None => return Err(unavailable(path, "no data rows")),
    };
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(unavailable(
            path,
            format!("row {} has {} columns, expected {}", idx, row.len(), width),
        ));
    }

    let height = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat).map_err(|err| unavailable(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_file(contents: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(contents.as_bytes()).unwrap();
        temp
    }

    #[test]
    fn reads_pipe_table_with_comments() {
        let temp = table_file("# l | v\n40.5 | 12.0\n 41.5|13.5 \n\n# trailer\n");
        let table = read_table(temp.path(), Delimiter::Char(b'|'), b'#').unwrap();
        assert_eq!(table, array![[40.5, 12.0], [41.5, 13.5]]);
    }

    #[test]
    fn reads_whitespace_table_with_inline_comments() {
        let temp = table_file("# header\n280.1   -95.0\n\t281.7 -97.5 # note\n");
        let table = read_table(temp.path(), Delimiter::Whitespace, b'#').unwrap();
        assert_eq!(table, array![[280.1, -95.0], [281.7, -97.5]]);
    }

    #[test]
    fn skips_indented_comment_lines() {
        let temp = table_file("  # indented header\n40.5 | 12.0\n");
        let table = read_table(temp.path(), Delimiter::Char(b'|'), b'#').unwrap();
        assert_eq!(table, array![[40.5, 12.0]]);
    }

    #[test]
    fn strips_trailing_comments_from_delimited_rows() {
        let temp = table_file("40.5 & 12.0 # note\n41.5 & 13.0\n");
        let table = read_table(temp.path(), Delimiter::Char(b'&'), b'#').unwrap();
        assert_eq!(table, array![[40.5, 12.0], [41.5, 13.0]]);
    }

    #[test]
    fn parse_errors_name_the_bad_field() {
        let temp = table_file("# header\n1.0,2.0\n3.0,x\n");
        let err = read_table(temp.path(), Delimiter::Char(b','), b'#').unwrap_err();
        assert!(err.to_string().contains("'x' is not a number"));
    }

    #[test]
    fn reads_ampersand_table() {
        let temp = table_file("45.0 & 70.0\n46.0 & 71.0\n");
        let table = read_table(temp.path(), Delimiter::Char(b'&'), b'#').unwrap();
        assert_eq!(table.dim(), (2, 2));
        assert_eq!(table[[1, 1]], 71.0);
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table(&dir.path().join("absent.dat"), Delimiter::Whitespace, b'#')
            .unwrap_err();
        assert!(matches!(err, SurveyError::DataUnavailable(_)));
    }

    #[test]
    fn non_numeric_cell_is_data_unavailable() {
        let temp = table_file("1.0,abc\n");
        let err = read_table(temp.path(), Delimiter::Char(b','), b'#').unwrap_err();
        assert!(matches!(err, SurveyError::DataUnavailable(_)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let temp = table_file("1.0 2.0\n3.0\n");
        let err = read_table(temp.path(), Delimiter::Whitespace, b'#').unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 columns"));
    }

    #[test]
    fn comment_only_file_has_no_rows() {
        let temp = table_file("# nothing here\n");
        assert!(read_table(temp.path(), Delimiter::Char(b'|'), b'#').is_err());
    }

    #[test]
    fn select_column_checks_width() {
        let table = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(select_column(&table, 1).unwrap(), array![2.0, 4.0]);
        assert!(matches!(
            select_column(&table, 2),
            Err(SurveyError::DataUnavailable(_))
        ));
    }

    #[test]
    fn data_root_joins_relative_paths() {
        let root = DataRoot::new("/srv/data");
        assert_eq!(
            root.resolve("mwpot14data/clemens1985_table2.dat"),
            PathBuf::from("/srv/data/mwpot14data/clemens1985_table2.dat")
        );
    }
}
