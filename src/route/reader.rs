//! Plain-text route file reader.

use super::{Point, Route};
use crate::error::{MeanderError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Route file reader.
///
/// Reads the result format produced by the tour solvers this viewer pairs
/// with: one stop per line, two whitespace-separated floating-point fields.
/// Anything after the second field is ignored.
#[derive(Debug)]
pub struct RouteReader;

impl RouteReader {
    /// Read a route file.
    ///
    /// Returns an empty route for an empty file; every non-empty line must
    /// carry two parseable coordinates or the whole read fails.
    pub fn read_file(path: &Path) -> Result<Route> {
        let file = File::open(path).map_err(|e| MeanderError::file_open(path.to_path_buf(), e))?;
        let reader = BufReader::new(file);

        let mut points = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            points.push(Self::parse_line(path, idx + 1, &line)?);
        }

        Ok(Route::new(points))
    }

    fn parse_line(path: &Path, line_no: usize, line: &str) -> Result<Point> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() < 2 {
            return Err(MeanderError::parse(
                path.to_path_buf(),
                line_no,
                format!("expected two coordinates, found {}", fields.len()),
            ));
        }

        let x = Self::parse_coord(path, line_no, fields[0])?;
        let y = Self::parse_coord(path, line_no, fields[1])?;

        Ok(Point::new(x, y))
    }

    fn parse_coord(path: &Path, line_no: usize, token: &str) -> Result<f64> {
        token.parse::<f64>().map_err(|_| {
            MeanderError::parse(
                path.to_path_buf(),
                line_no,
                format!("invalid coordinate '{}'", token),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_route(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_one_stop_per_line_in_order() {
        let file = write_route("0 0\n1 0\n1 1\n0 1\n");
        let route = RouteReader::read_file(file.path()).unwrap();

        assert_eq!(route.len(), 4);
        let expected = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for (p, (x, y)) in route.points().iter().zip(expected) {
            assert_eq!((p.x, p.y), (x, y));
        }
    }

    #[test]
    fn extra_whitespace_and_trailing_fields_are_ignored() {
        let file = write_route("1.5   2.5   extra\n");
        let route = RouteReader::read_file(file.path()).unwrap();
        assert_eq!(route.get(0), Some(Point::new(1.5, 2.5)));
    }

    #[test]
    fn negative_and_scientific_floats_parse() {
        let file = write_route("-1.5 2e3\n");
        let route = RouteReader::read_file(file.path()).unwrap();
        assert_eq!(route.get(0), Some(Point::new(-1.5, 2000.0)));
    }

    #[test]
    fn non_numeric_token_is_a_parse_error_with_line_number() {
        let file = write_route("0 0\nabc 1.0\n");
        let err = RouteReader::read_file(file.path()).unwrap_err();
        match err {
            MeanderError::Parse { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("'abc'"));
            },
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn short_line_is_a_parse_error() {
        let file = write_route("1.0\n");
        let err = RouteReader::read_file(file.path()).unwrap_err();
        assert!(matches!(err, MeanderError::Parse { line: 1, .. }));
    }

    #[test]
    fn blank_line_is_a_parse_error() {
        let file = write_route("0 0\n\n1 1\n");
        let err = RouteReader::read_file(file.path()).unwrap_err();
        assert!(matches!(err, MeanderError::Parse { line: 2, .. }));
    }

    #[test]
    fn empty_file_loads_an_empty_route() {
        let file = write_route("");
        let route = RouteReader::read_file(file.path()).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn missing_file_is_a_file_open_error() {
        let err = RouteReader::read_file(Path::new("definitely_missing.txt")).unwrap_err();
        assert!(matches!(err, MeanderError::FileOpen { .. }));
    }
}
