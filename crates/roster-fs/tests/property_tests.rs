use proptest::prelude::*;
use roster_fs::io;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_write_then_read_returns_content(content in "\\PC*") {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");

        io::write_text(&path, &content).unwrap();

        prop_assert_eq!(io::read_text(&path).unwrap(), content);
    }

    #[test]
    fn test_appends_are_kept_in_order(lines in prop::collection::vec("[a-zA-Z0-9 :-]{0,40}", 1..10)) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");

        for line in &lines {
            io::append_line(&path, line).unwrap();
        }

        let content = io::read_text(&path).unwrap();
        let read_back: Vec<&str> = content.split_terminator('\n').collect();
        prop_assert_eq!(read_back, lines.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
