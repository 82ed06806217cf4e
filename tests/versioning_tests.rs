//! Integration tests: driving the persistent collections through
//! `VersionHistory`, the way application code tracks successive versions.

use rstest::rstest;
use strata::history::VersionHistory;
use strata::persistent::{AvlMap, PathList, TrieArray};
use strata::value::Value;

#[rstest]
fn test_array_versions_through_history() {
    let initial = TrieArray::from_slice(&[1, 2, 3]);
    let mut history = VersionHistory::new(initial);

    let updated = history.current().set(1, 100).unwrap();
    history.update(updated);

    assert_eq!(history.current().get(1).unwrap(), Some(&100));
    assert_eq!(history.undo().get(1).unwrap(), Some(&2));
    assert_eq!(history.redo().get(1).unwrap(), Some(&100));
}

#[rstest]
fn test_list_versions_through_history() {
    let mut history = VersionHistory::new(PathList::new());
    for element in 1..=3 {
        let next = history.current().push_back(element);
        history.update(next);
    }

    assert_eq!(history.current().len(), 3);
    assert_eq!(history.undo().len(), 2);
    assert_eq!(history.undo().len(), 1);

    // Branch off: the abandoned future (lengths 2 and 3) is discarded.
    let rebuilt = history.current().push_back(99);
    history.update(rebuilt);
    assert!(!history.can_redo());
    assert_eq!(history.current().get(1).unwrap(), Some(99));
}

#[rstest]
fn test_map_versions_through_history() {
    let mut history = VersionHistory::new(AvlMap::new());

    let with_a = history.current().insert("a", 1);
    history.update(with_a);
    let with_b = history.current().insert("b", 2);
    history.update(with_b);
    let without_a = history.current().remove("a");
    history.update(without_a);

    assert_eq!(history.current().get("a"), None);
    assert_eq!(history.current().len(), 1);

    let keys: Vec<&&str> = history.current().keys().collect();
    assert_eq!(keys, vec![&"b"]);

    // Undo back to the two-entry version; it was never touched.
    let previous = history.undo();
    assert_eq!(previous.get("a"), Some(&1));
    assert_eq!(previous.len(), 2);
}

#[rstest]
fn test_every_recorded_snapshot_remains_valid() {
    let mut history = VersionHistory::new(TrieArray::of_size(8));
    for index in 0..8 {
        let next = history
            .current()
            .set(index, i32::try_from(index).expect("small"))
            .unwrap();
        history.update(next);
    }

    // Walk the whole timeline backward and forward, checking each snapshot.
    for expected_populated in (0..=8_usize).rev() {
        let snapshot = history.current();
        let populated = snapshot.iter().flatten().count();
        assert_eq!(populated, expected_populated);
        history.undo();
    }
    for expected_populated in 0..=8_usize {
        let snapshot = history.current();
        let populated = snapshot.iter().flatten().count();
        assert_eq!(populated, expected_populated);
        history.redo();
    }
}

#[rstest]
fn test_nested_value_document_with_history() {
    let document = AvlMap::new()
        .insert("title".to_string(), Value::from("draft"))
        .insert(
            "tags".to_string(),
            Value::List(PathList::new().push_back(Value::from("rust"))),
        );
    let mut history = VersionHistory::new(document);

    let retitled = history
        .current()
        .insert("title".to_string(), Value::from("final"));
    history.update(retitled);

    assert_eq!(
        history.current().get("title").and_then(Value::as_str),
        Some("final")
    );
    assert_eq!(
        history.undo().get("title").and_then(Value::as_str),
        Some("draft")
    );

    // The nested list is shared untouched across both versions.
    for version in [history.current()] {
        match version.get("tags") {
            Some(Value::List(tags)) => assert_eq!(tags.len(), 1),
            _ => panic!("tags should be a list"),
        }
    }
}
