//! End-to-end pipeline tests, from physical table names to files on disk.
//! Metadata is populated by hand, standing in for the per-table fetches.

use std::collections::BTreeMap;

use schema_book::{Column, OutputDir, TableGroup, book, group_tables};

fn populate(groups: &mut BTreeMap<String, TableGroup>) {
    for group in groups.values_mut() {
        group.columns = vec![Column {
            field: "id".to_string(),
            data_type: "bigint(20)".to_string(),
            null: "NO".to_string(),
            key: "PRI".to_string(),
            default_value: String::new(),
            comment: String::new(),
            extra: "auto_increment".to_string(),
        }];
        group.create_sql = format!(
            "CREATE TABLE `{}` (\n  `id` bigint(20) NOT NULL AUTO_INCREMENT\n)",
            group.real_name
        );
    }
}

#[test]
fn sharded_database_renders_one_page_per_logical_table() {
    //* Given
    let tables = vec![
        "user_1".to_string(),
        "user_2".to_string(),
        "log".to_string(),
    ];
    let base = tempfile::tempdir().expect("temp dir");

    //* When
    let mut groups = group_tables(&tables, true);
    populate(&mut groups);
    let out = OutputDir::reset(base.path(), "app").expect("reset output dir");
    for page in book::render(&groups) {
        out.write(&page.filename, &page.content).expect("write page");
    }

    //* Then
    let mut filenames: Vec<String> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    filenames.sort();
    assert_eq!(filenames, ["README.md", "SUMMARY.md", "log.md", "user.md"]);

    let user = std::fs::read_to_string(out.path().join("user.md")).unwrap();
    assert!(user.contains("## user\n"));
    assert!(user.contains("共2张表"));
    assert!(user.contains("CREATE TABLE `user_1`"));

    let log = std::fs::read_to_string(out.path().join("log.md")).unwrap();
    assert!(log.contains("共1张表"));

    let readme = std::fs::read_to_string(out.path().join("README.md")).unwrap();
    assert!(readme.contains("* [log](log.md)\n"));
    assert!(readme.contains("* [user](user.md)\n"));
}

#[test]
fn empty_database_renders_only_the_index_pages() {
    //* Given
    let tables: Vec<String> = vec![];
    let base = tempfile::tempdir().expect("temp dir");

    //* When
    let groups = group_tables(&tables, true);
    let out = OutputDir::reset(base.path(), "empty").expect("reset output dir");
    for page in book::render(&groups) {
        out.write(&page.filename, &page.content).expect("write page");
    }

    //* Then
    let mut filenames: Vec<String> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    filenames.sort();
    assert_eq!(filenames, ["README.md", "SUMMARY.md"]);

    let readme = std::fs::read_to_string(out.path().join("README.md")).unwrap();
    assert_eq!(readme, "### 目录 \n\n");

    let summary = std::fs::read_to_string(out.path().join("SUMMARY.md")).unwrap();
    assert_eq!(summary, "* [目录](README.md)\n");
}
