use cabinet::{Cabinet, FileCabinet, Folder, FolderNode, MultiFolder, QueryError};

/// Root C holds B and Test7; B holds A and Test6; A holds Test1 and Test2.
fn nested_root() -> FileCabinet {
    let a = FileCabinet::new(
        vec![
            FolderNode::entry("Test1", "small"),
            FolderNode::entry("Test2", "medium"),
        ],
        "A",
        "small",
    );
    let b = FileCabinet::new(
        vec![FolderNode::from(a), FolderNode::entry("Test6", "large")],
        "B",
        "large",
    );
    FileCabinet::new(
        vec![FolderNode::from(b), FolderNode::entry("Test7", "medium")],
        "C",
        "large",
    )
}

fn names(folders: &[&FolderNode]) -> Vec<String> {
    folders.iter().map(|f| f.name().to_string()).collect()
}

#[test]
fn nested_count_includes_cabinets_and_leaves() {
    let root = nested_root();
    assert_eq!(root.count(), 6);

    let order: Vec<&str> = root.iter().map(|f| f.name()).collect();
    assert_eq!(order, vec!["B", "A", "Test1", "Test2", "Test6", "Test7"]);
}

#[test]
fn nested_find_by_name_reaches_deepest_leaf() {
    let root = nested_root();
    let found = root.find_folder_by_name(Some("test1")).unwrap();
    assert_eq!(found.name(), "Test1");
    assert_eq!(found.size(), "small");
    assert!(!found.is_cabinet());
}

#[test]
fn nested_cabinets_are_candidates_themselves() {
    let root = nested_root();
    let a = root.find_folder_by_name(Some(" a ")).unwrap();
    assert!(a.is_cabinet());
    assert_eq!(a.children().map(|c| c.len()), Some(2));
}

#[test]
fn nested_find_by_size_keeps_traversal_order() {
    let root = nested_root();

    let medium = root.find_folders_by_size(Some("medium")).unwrap();
    assert_eq!(names(&medium), vec!["Test2", "Test7"]);

    let large = root.find_folders_by_size(Some("LARGE")).unwrap();
    assert_eq!(names(&large), vec!["B", "Test6"]);

    let small = root.find_folders_by_size(Some("small")).unwrap();
    assert_eq!(names(&small), vec!["A", "Test1"]);
}

#[test]
fn nested_invalid_size_fails_before_scanning() {
    let root = nested_root();
    assert_eq!(
        root.find_folders_by_size(None).unwrap_err(),
        QueryError::InvalidSize
    );
    let err = root.find_folders_by_size(Some("bogus")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid folder size.");
}

#[test]
fn replacing_children_resets_queries() {
    let root = nested_root();

    for replaced in [root.cleared(), root.with_folders(Vec::new())] {
        assert_eq!(replaced.count(), 0);
        assert!(replaced.find_folder_by_name(Some("test1")).is_none());
        assert!(replaced.find_folders_by_size(Some("medium")).unwrap().is_empty());
        assert!(replaced.find_folders_by_size(Some("huge")).is_err());
        assert_eq!(replaced.name(), "C");
    }

    let absent = FileCabinet::from_slots(None, "C", "large");
    assert_eq!(absent.count(), 0);
    assert!(absent.find_folder_by_name(Some("test1")).is_none());

    assert_eq!(root.count(), 6);
}

#[test]
fn absent_slots_are_skipped() {
    let root = FileCabinet::from_slots(
        Some(vec![
            None,
            Some(FolderNode::from(nested_root())),
            None,
            Some(FolderNode::entry("tail", "small")),
        ]),
        "outer",
        "large",
    );
    assert_eq!(root.folders().len(), 2);
    assert_eq!(root.count(), 8);
    assert_eq!(root.iter().last().map(|f| f.name()), Some("tail"));
}

#[test]
fn queries_are_repeatable() {
    let root = nested_root();
    let first = names(&root.find_folders_by_size(Some("medium")).unwrap());
    let second = names(&root.find_folders_by_size(Some("medium")).unwrap());
    assert_eq!(first, second);
    assert_eq!(
        root.find_folder_by_name(Some("TEST6")),
        root.find_folder_by_name(Some("test6"))
    );
    assert_eq!(root.count(), root.count());
}

#[test]
fn validation_flags_malformed_nested_entries() {
    let root = FileCabinet::new(
        vec![
            FolderNode::from(FileCabinet::new(
                vec![FolderNode::entry("odd", "gigantic")],
                "inner",
                "small",
            )),
            FolderNode::entry("fine", "large"),
        ],
        "root",
        "large",
    );

    let report = root.validate();
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("'odd'"));

    // The malformed entry is skipped by size queries rather than failing them.
    let large = root.find_folders_by_size(Some("large")).unwrap();
    assert_eq!(names(&large), vec!["fine"]);
}
