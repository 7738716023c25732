//! Replay sequences for the deterministic variable
//!
//! A sequence file holds floating-point values separated by whitespace,
//! normally one per line. Blank lines are ignored; anything that does not
//! parse as a number is an error, including bytes that are not valid UTF-8.
//! The file handle lives only for the duration of the load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::error::RandomVarError;

const VAR: &str = "deterministic";

/// Read every value of a sequence file
///
/// # Errors
/// - `FileOpen` if `path` cannot be opened for reading
/// - `FileClose` if reading fails after the file was opened
/// - `MalformedValue` for a token that is not a number
/// - `EmptySequence` if the file holds no values
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, RandomVarError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| RandomVarError::FileOpen {
        var: VAR.to_string(),
        path: origin.clone(),
        reason: e.to_string(),
    })?;

    let values = read_values(file, &origin)?;
    info!(path = %origin, count = values.len(), "loaded deterministic sequence");
    Ok(values)
}

/// Read values from any reader; `origin` labels errors
///
/// Lines are decoded lossily, so invalid UTF-8 surfaces as a
/// `MalformedValue` on its line. Only genuine I/O failures of the reader
/// become `FileClose`.
pub fn read_values<R: Read>(reader: R, origin: &str) -> Result<Vec<f64>, RandomVarError> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut values = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| RandomVarError::FileClose {
                var: VAR.to_string(),
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| RandomVarError::MalformedValue {
                    var: VAR.to_string(),
                    path: origin.to_string(),
                    line: line_no,
                    literal: token.to_string(),
                })?;
            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(RandomVarError::EmptySequence {
            var: VAR.to_string(),
        });
    }
    Ok(values)
}

/// Smallest and largest value of a non-empty sequence
pub(crate) fn sequence_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Reader that fails on every call
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device went away"))
        }
    }

    #[test]
    fn test_read_one_per_line() {
        let data = "1.5\n2\n\n-3.25\n";
        let values = read_values(data.as_bytes(), "inline").unwrap();
        assert_eq!(values, vec![1.5, 2.0, -3.25]);
    }

    #[test]
    fn test_read_whitespace_separated() {
        let data = "1 2 3\n4\t5\n";
        let values = read_values(data.as_bytes(), "inline").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_malformed_token_reports_line() {
        let data = "1\n2\nthree\n";
        let err = read_values(data.as_bytes(), "trace.txt").unwrap_err();
        assert_eq!(
            err,
            RandomVarError::MalformedValue {
                var: "deterministic".to_string(),
                path: "trace.txt".to_string(),
                line: 3,
                literal: "three".to_string(),
            }
        );
    }

    #[test]
    fn test_read_failure_is_close_error() {
        let err = read_values(BrokenReader, "trace.txt").unwrap_err();
        match &err {
            RandomVarError::FileClose { var, path, reason } => {
                assert_eq!(var, "deterministic");
                assert_eq!(path, "trace.txt");
                assert!(reason.contains("device went away"));
            }
            other => panic!("Expected FileClose, got {:?}", other),
        }
        assert!(err.is_file_error());
    }

    #[test]
    fn test_invalid_utf8_is_malformed_value() {
        let data: &[u8] = b"1.5\n2\xff\n3\n";
        let err = read_values(data, "binary.txt").unwrap_err();
        match err {
            RandomVarError::MalformedValue { line, path, .. } => {
                assert_eq!(line, 2);
                assert_eq!(path, "binary.txt");
            }
            other => panic!("Expected MalformedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_last_line_without_newline() {
        let values = read_values("4\n5".as_bytes(), "inline").unwrap();
        assert_eq!(values, vec![4.0, 5.0]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = read_values("\n  \n".as_bytes(), "empty").unwrap_err();
        assert!(matches!(err, RandomVarError::EmptySequence { .. }));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(sequence_bounds(&[3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(sequence_bounds(&[]), None);
    }
}
