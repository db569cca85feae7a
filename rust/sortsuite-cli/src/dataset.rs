//! Dataset loading: one signed integer per line of a text file.
//!
//! Blank (whitespace-only) lines are skipped. Anything else that does not
//! parse as an integer is an error carrying its 1-based line number, so the
//! engine never sees malformed input.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid integer '{text}' on line {line}")]
    Parse { line: usize, text: String },
}

/// Load a dataset file.
pub fn load(path: &Path) -> Result<Vec<i64>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&content)
}

/// Parse dataset text (useful for testing and stdin input).
pub fn parse(content: &str) -> Result<Vec<i64>, DatasetError> {
    let mut data = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| DatasetError::Parse {
                line: idx + 1,
                text: trimmed.to_string(),
            })?;
        data.push(value);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_one_integer_per_line() {
        let data = parse("5\n3\n8\n1\n9\n2\n").expect("should parse");
        assert_eq!(data, vec![5, 3, 8, 1, 9, 2]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let data = parse("1\n\n  \n2\n\t\n3").expect("should parse");
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn parse_accepts_negative_and_padded_values() {
        let data = parse("  -42 \n0\n 17\n").expect("should parse");
        assert_eq!(data, vec![-42, 0, 17]);
    }

    #[test]
    fn parse_empty_input_yields_empty_dataset() {
        assert!(parse("").expect("empty is valid").is_empty());
        assert!(parse("\n\n").expect("blank is valid").is_empty());
    }

    #[test]
    fn parse_reports_offending_line_number() {
        let err = parse("1\n2\nthree\n4").unwrap_err();
        match err {
            DatasetError::Parse { line, text } => {
                assert_eq!(line, 3);
                assert_eq!(text, "three");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_floats() {
        assert!(parse("1.5").is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/sortsuite/dataset.txt")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
