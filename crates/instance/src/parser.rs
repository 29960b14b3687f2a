use std::path::Path;

use crate::error::{InstanceError, Result, Section};
use crate::types::{Instance, Item, Point};

const MIN_LINES: usize = 3;

/// Read and decode an instance file.
pub fn parse_instance_file(path: impl AsRef<Path>) -> Result<Instance> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_instance_str(&content)
}

/// Decode instance content.
///
/// Layout: `n m`, capacity, `n` item lines (`m` values + weight), the
/// declared point count, then one point per remaining line. Points are
/// kept as listed; the declared count is not enforced here.
pub fn parse_instance_str(content: &str) -> Result<Instance> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < MIN_LINES {
        return Err(InstanceError::TooShort { lines: lines.len() });
    }

    let header = parse_fields(lines[0], 1, Section::Header, Some(2))?;
    let item_count = positive(header[0], "item_count")?;
    let objective_count = positive(header[1], "objective_count")?;

    let capacity = parse_fields(lines[1], 2, Section::Capacity, Some(1))?[0];

    // Header counts are untrusted; size buffers from the lines actually present.
    let mut items = Vec::with_capacity(item_count.min(lines.len()));
    for idx in 2..2 + item_count {
        let line = lines
            .get(idx)
            .ok_or_else(|| InstanceError::missing(idx + 1, "item line"))?;
        let mut fields = parse_fields(line, idx + 1, Section::Item, Some(objective_count + 1))?;
        let weight = fields.pop().unwrap_or_default();
        items.push(Item::new(fields, weight));
    }

    let count_idx = 2 + item_count;
    let count_line = lines
        .get(count_idx)
        .ok_or_else(|| InstanceError::missing(count_idx + 1, "point count line"))?;
    let declared = parse_fields(count_line, count_idx + 1, Section::PointCount, Some(1))?[0];
    let declared_point_count = usize::try_from(declared).map_err(|_| InstanceError::OutOfRange {
        field: "declared_point_count",
        value: declared,
        min: 0,
    })?;

    let point_lines = &lines[count_idx + 1..];
    let mut points: Vec<Point> = Vec::with_capacity(point_lines.len());
    let mut arity = None;
    for (offset, line) in point_lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = count_idx + 2 + offset;
        // The first point fixes the arity for the rest.
        let point = Point::new(parse_fields(line, line_no, Section::Point, arity)?);
        arity.get_or_insert(point.arity());
        points.push(point);
    }

    Ok(Instance {
        item_count,
        objective_count,
        capacity,
        items,
        declared_point_count,
        points,
    })
}

/// Split a line on whitespace into integers, optionally checking the count.
fn parse_fields(
    line: &str,
    line_no: usize,
    section: Section,
    expected: Option<usize>,
) -> Result<Vec<i64>> {
    let fields = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| InstanceError::invalid_integer(line_no, token))
        })
        .collect::<Result<Vec<_>>>()?;

    match expected {
        Some(expected) if fields.len() != expected => Err(InstanceError::FieldCount {
            line: line_no,
            section,
            expected,
            found: fields.len(),
        }),
        _ => Ok(fields),
    }
}

fn positive(value: i64, field: &'static str) -> Result<usize> {
    if value < 1 {
        return Err(InstanceError::OutOfRange {
            field,
            value,
            min: 1,
        });
    }
    usize::try_from(value).map_err(|_| InstanceError::OutOfRange {
        field,
        value,
        min: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "2 1\n10\n3 1\n5 2\n3\n1 2\n3 4\n1 2\n";

    #[test]
    fn parses_all_sections() {
        let inst = parse_instance_str(SAMPLE).unwrap();
        assert_eq!(inst.item_count, 2);
        assert_eq!(inst.objective_count, 1);
        assert_eq!(inst.capacity, 10);
        assert_eq!(
            inst.items,
            vec![Item::new(vec![3], 1), Item::new(vec![5], 2)]
        );
        assert_eq!(inst.declared_point_count, 3);
        assert_eq!(
            inst.points,
            vec![
                Point::new(vec![1, 2]),
                Point::new(vec![3, 4]),
                Point::new(vec![1, 2])
            ]
        );
    }

    #[test]
    fn tolerates_crlf_and_extra_spacing() {
        let inst = parse_instance_str("1  2\r\n 7\r\n4 5 6\r\n1\r\n  9\t8 \r\n").unwrap();
        assert_eq!(inst.items, vec![Item::new(vec![4, 5], 6)]);
        assert_eq!(inst.points, vec![Point::new(vec![9, 8])]);
    }

    #[test]
    fn declared_count_is_not_enforced() {
        let inst = parse_instance_str("1 1\n5\n1 1\n4\n7\n").unwrap();
        assert_eq!(inst.declared_point_count, 4);
        assert_eq!(inst.points.len(), 1);

        let empty = parse_instance_str("1 1\n5\n1 1\n0\n").unwrap();
        assert!(empty.points.is_empty());
    }

    #[test]
    fn skips_blank_point_lines() {
        let inst = parse_instance_str("1 1\n5\n1 1\n2\n7\n\n8\n\n").unwrap();
        assert_eq!(inst.points, vec![Point::new(vec![7]), Point::new(vec![8])]);
    }

    #[test]
    fn rejects_short_file() {
        let err = parse_instance_str("2 1\n10\n").unwrap_err();
        assert!(matches!(err, InstanceError::TooShort { lines: 2 }));
        assert!(err.is_format_error());
    }

    #[test]
    fn rejects_truncated_items() {
        let err = parse_instance_str("3 1\n10\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingLine {
                line: 4,
                expected: "item line"
            }
        ));
    }

    #[test]
    fn rejects_missing_point_count() {
        let err = parse_instance_str("1 1\n10\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingLine {
                line: 4,
                expected: "point count line"
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_instance_str("1 1\n10\n1 x\n1\n2\n").unwrap_err();
        match err {
            InstanceError::InvalidInteger { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_item_with_wrong_arity() {
        let err = parse_instance_str("1 2\n10\n1 1\n1\n2 2\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::FieldCount {
                line: 3,
                section: Section::Item,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_points_with_mixed_arity() {
        let err = parse_instance_str("1 1\n10\n1 1\n2\n1 2\n3\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::FieldCount {
                line: 6,
                section: Section::Point,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = parse_instance_str("0 1\n10\n0\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::OutOfRange {
                field: "item_count",
                value: 0,
                min: 1
            }
        ));
        let err = parse_instance_str("1 -2\n10\n1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::OutOfRange {
                field: "objective_count",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_point_count() {
        let err = parse_instance_str("1 1\n10\n1 1\n-1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::OutOfRange {
                field: "declared_point_count",
                value: -1,
                min: 0
            }
        ));
    }

    #[test]
    fn huge_declared_count_is_only_a_label() {
        let inst = parse_instance_str("1 1\n5\n1 1\n1000000000000000\n7\n").unwrap();
        assert_eq!(inst.declared_point_count, 1_000_000_000_000_000);
        assert_eq!(inst.points, vec![Point::new(vec![7])]);
    }

    #[test]
    fn huge_item_count_on_truncated_file_is_missing_line() {
        let err = parse_instance_str("9223372036854775807 1\n5\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingLine {
                line: 4,
                expected: "item line"
            }
        ));
    }

    #[test]
    fn reads_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("20_1.in");
        fs::write(&path, SAMPLE).unwrap();
        let inst = parse_instance_file(&path).unwrap();
        assert_eq!(inst.points.len(), 3);

        let err = parse_instance_file(temp.path().join("missing.in")).unwrap_err();
        assert!(matches!(err, InstanceError::IoError(_)));
        assert!(!err.is_format_error());
    }
}
