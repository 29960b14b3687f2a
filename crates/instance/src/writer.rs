use std::path::Path;

use crate::error::Result;
use crate::types::Instance;

/// Serialize an instance in canonical form with duplicate points removed.
///
/// Items keep their order and arity. Points keep first-occurrence order and
/// the count line is rewritten to the number of distinct points.
pub fn render_instance(instance: &Instance) -> String {
    let canonical = instance.deduplicated();

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        canonical.item_count, canonical.objective_count
    ));
    out.push_str(&format!("{}\n", canonical.capacity));
    for item in &canonical.items {
        push_joined(&mut out, item.fields());
    }
    out.push_str(&format!("{}\n", canonical.declared_point_count));
    for point in &canonical.points {
        push_joined(&mut out, point.values().iter().copied());
    }
    out
}

/// Overwrite `path` with [`render_instance`] output and return the number of
/// points written.
///
/// Writes in place with no backup; an interrupted write leaves a truncated
/// file behind.
pub fn write_instance(path: impl AsRef<Path>, instance: &Instance) -> Result<usize> {
    let path = path.as_ref();
    let rendered = render_instance(instance);
    std::fs::write(path, rendered)?;
    let written = instance.unique_point_count();
    log::debug!(
        "Rewrote {} with {} point(s) (was {} declared)",
        path.display(),
        written,
        instance.declared_point_count
    );
    Ok(written)
}

fn push_joined(out: &mut String, values: impl Iterator<Item = i64>) {
    let parts: Vec<String> = values.map(|value| value.to_string()).collect();
    out.push_str(&format!("{}\n", parts.join(" ")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_instance_file, parse_instance_str};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renders_canonical_layout_without_repeats() {
        let inst = parse_instance_str("2 1\n10\n3 1\n5 2\n3\n1 2\n3 4\n1 2\n").unwrap();
        assert_eq!(
            render_instance(&inst),
            "2 1\n10\n3 1\n5 2\n2\n1 2\n3 4\n"
        );
    }

    #[test]
    fn normalizes_spacing_only_for_clean_instances() {
        let inst = parse_instance_str("1   2\n 8\n1  2 3\n2\n4 5\n6   7").unwrap();
        assert_eq!(render_instance(&inst), "1 2\n8\n1 2 3\n2\n4 5\n6 7\n");
    }

    #[test]
    fn overwrites_file_in_place() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.in");
        fs::write(&path, "1 1\n4\n2 3\n4\n9\n8\n9\n9\n").unwrap();

        let inst = parse_instance_file(&path).unwrap();
        let written = write_instance(&path, &inst).unwrap();
        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 1\n4\n2 3\n2\n9\n8\n");

        let reread = parse_instance_file(&path).unwrap();
        assert!(reread.is_consistent());
        assert_eq!(reread, inst.deduplicated());
    }

    fn instance_strategy() -> impl Strategy<Value = String> {
        (1usize..4, 1usize..4).prop_flat_map(|(n, m)| {
            let items = proptest::collection::vec(proptest::collection::vec(-50i64..50, m + 1), n);
            let points = proptest::collection::vec(proptest::collection::vec(0i64..3, m), 0..12);
            (Just(n), Just(m), -100i64..100, items, points).prop_map(
                |(n, m, capacity, items, points)| {
                    let mut text = format!("{n} {m}\n{capacity}\n");
                    for item in items {
                        text.push_str(&join(&item));
                    }
                    text.push_str(&format!("{}\n", points.len()));
                    for point in points {
                        text.push_str(&join(&point));
                    }
                    text
                },
            )
        })
    }

    fn join(values: &[i64]) -> String {
        let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
        format!("{}\n", parts.join(" "))
    }

    proptest! {
        #[test]
        fn proptest_rewrite_is_idempotent(text in instance_strategy()) {
            let first = render_instance(&parse_instance_str(&text).unwrap());
            let reparsed = parse_instance_str(&first).unwrap();
            prop_assert!(reparsed.is_consistent());
            prop_assert_eq!(render_instance(&reparsed), first);
        }

        #[test]
        fn proptest_rewrite_preserves_items_and_first_occurrences(text in instance_strategy()) {
            let original = parse_instance_str(&text).unwrap();
            let rewritten = parse_instance_str(&render_instance(&original)).unwrap();
            prop_assert_eq!(&rewritten.items, &original.items);
            prop_assert_eq!(rewritten.capacity, original.capacity);
            prop_assert_eq!(rewritten.points, original.deduplicated().points);
        }
    }
}
