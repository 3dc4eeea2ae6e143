//! Listing skips comments and blank lines, keeps order.

mod common;

use hostsedit::hosts;
use hostsedit::platform::FileHostsEditor;

#[test]
fn lists_only_entries_in_file_order() {
    let dir = common::temp_dir();
    let path = common::hosts_file(
        dir.path(),
        "# header\n\n127.0.0.1 localhost\n   \n#10.0.0.1 off.test\n10.0.0.2 on.test # trailing\n",
    );
    let editor = FileHostsEditor::new(&path);

    let entries = hosts::list_entries(&editor).unwrap();

    assert_eq!(entries, vec!["127.0.0.1 localhost", "10.0.0.2 on.test # trailing"]);
}

#[test]
fn empty_file_lists_nothing() {
    let dir = common::temp_dir();
    let path = common::hosts_file(dir.path(), "");
    let editor = FileHostsEditor::new(&path);

    assert!(hosts::list_entries(&editor).unwrap().is_empty());
}

#[test]
fn byte_order_mark_is_not_part_of_first_line() {
    let dir = common::temp_dir();
    let path = common::hosts_file(dir.path(), "\u{feff}# Copyright Microsoft\n127.0.0.1 localhost\n");
    let editor = FileHostsEditor::new(&path);

    assert_eq!(hosts::list_entries(&editor).unwrap(), vec!["127.0.0.1 localhost"]);
}

#[test]
fn undecodable_bytes_are_listed_lossily() {
    let dir = common::temp_dir();
    let path = dir.path().join("hosts");
    std::fs::write(&path, b"# H\xf4te local\n10.0.0.1 caf\xe9.test\n127.0.0.1 localhost\n").unwrap();
    let editor = FileHostsEditor::new(&path);

    let entries = hosts::list_entries(&editor).unwrap();

    assert_eq!(entries, vec!["10.0.0.1 caf\u{fffd}.test", "127.0.0.1 localhost"]);
}
