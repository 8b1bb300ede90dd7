#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use orgfmt::formatting::*;
    use orgfmt::loading;

    /// Golden test for the format command
    ///
    /// Every .json document tree in tests/golden/ is rendered with the
    /// default tags column and compared against the .org file of the same
    /// name. If a pair fails, either the writer is wrong (a bug that needs to
    /// be fixed!) or the expected .org file needs updating after a
    /// deliberate change in output.

    /// Simple diff function to show line-by-line differences
    fn show_diff(expected: &str, rendered: &str, file_path: &Path) {
        let expected_lines: Vec<&str> = expected
            .lines()
            .collect();
        let rendered_lines: Vec<&str> = rendered
            .lines()
            .collect();

        let max_lines = expected_lines
            .len()
            .max(rendered_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Expected");
        println!("+++ Rendered");

        for i in 0..max_lines {
            let expected_line = expected_lines
                .get(i)
                .unwrap_or(&"");
            let rendered_line = rendered_lines
                .get(i)
                .unwrap_or(&"");

            if expected_line != rendered_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", expected_line);
                println!("+ {}", rendered_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("json")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .json files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = loading::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = loading::decode(&file, &content)
                .unwrap_or_else(|e| panic!("Failed to decode file {:?}: {:?}", file, e));

            let expected_file = file.with_extension("org");
            let expected = fs::read_to_string(&expected_file)
                .unwrap_or_else(|e| panic!("Failed to read {:?}: {:?}", expected_file, e));

            let result = render(&document, TAGS_COLUMN);

            if result != expected {
                show_diff(&expected, &result, &expected_file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "All golden documents must render exactly, but {} did not",
                failures.len()
            );
        }
    }

    #[test]
    fn rendering_is_stable() {
        let file = Path::new("tests/golden/shopping.json");
        let content = loading::load(file).unwrap();
        let document = loading::decode(file, &content).unwrap();

        let first = render(&document, TAGS_COLUMN);
        let second = render(&document, TAGS_COLUMN);
        assert_eq!(first, second);
    }
}
