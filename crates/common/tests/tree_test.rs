use nx_generator_common::tree::{FileTree, MemoryTree};
use starbase_sandbox::create_empty_sandbox;
use std::fs;
use std::path::Path;

mod memory_tree {
    use super::*;

    #[test]
    fn read_prefers_staged_content() {
        let mut tree = MemoryTree::new();
        tree.seed("a.json", "{\"old\":true}");

        assert_eq!(tree.read(Path::new("a.json")).unwrap(), "{\"old\":true}");

        tree.write(Path::new("a.json"), "{\"new\":true}".into());

        assert_eq!(tree.read(Path::new("a.json")).unwrap(), "{\"new\":true}");
    }

    #[test]
    fn seeding_records_no_change() {
        let mut tree = MemoryTree::new();
        tree.seed("a.json", "{}");

        assert!(tree.exists(Path::new("a.json")));
        assert!(tree.changed_paths().is_empty());
    }

    #[test]
    fn changed_paths_are_sorted() {
        let mut tree = MemoryTree::new();
        tree.write(Path::new("z.json"), "{}".into());
        tree.write(Path::new("a/b.json"), "{}".into());
        tree.write(Path::new("a/a.json"), "{}".into());

        assert_eq!(
            tree.changed_paths(),
            vec![
                Path::new("a/a.json"),
                Path::new("a/b.json"),
                Path::new("z.json"),
            ]
        );
    }

    #[test]
    fn rewrites_replace_instead_of_append() {
        let mut tree = MemoryTree::new();
        tree.write(Path::new("a.json"), "one".into());
        tree.write(Path::new("a.json"), "two".into());

        assert_eq!(tree.changed_paths().len(), 1);
        assert_eq!(tree.read(Path::new("a.json")).unwrap(), "two");
    }

    #[test]
    fn commit_writes_staged_files_to_disk() {
        let sandbox = create_empty_sandbox();
        let mut tree = MemoryTree::new();
        tree.write(Path::new("libs/test-lib/.eslintrc.json"), "{}".into());

        tree.commit(sandbox.path()).unwrap();

        assert_eq!(
            fs::read_to_string(sandbox.path().join("libs/test-lib/.eslintrc.json")).unwrap(),
            "{}"
        );

        // Staged entries fold into base state
        assert!(tree.changed_paths().is_empty());
        assert!(tree.exists(Path::new("libs/test-lib/.eslintrc.json")));
    }
}
