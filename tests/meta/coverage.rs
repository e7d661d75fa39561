//! Checks that every source file has a mirrored unit test file and back

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module files carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = match path.strip_prefix(base) {
                Ok(stripped) => stripped.to_string_lossy().replace('\\', "/"),
                Err(_prefix_error) => return Err(io::Error::other("Failed to strip prefix")),
            };

            if path.is_dir() {
                out.insert(relative);
                rust_files(&path, base, out)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let root = Path::new(dir);
        let result = rust_files(root, root, &mut paths);
        assert!(result.is_ok(), "Failed to read {dir}: {result:?}");
        paths
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = collect(UNIT_DIR);
        let missing: Vec<String> = collect(SRC_DIR)
            .into_iter()
            .filter(|path| !is_structural(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = collect(SRC_DIR);
        let orphaned: Vec<String> = collect(UNIT_DIR)
            .into_iter()
            .filter(|path| !is_structural(path) && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty = Vec::new();
        for path in collect("tests") {
            let file = Path::new("tests").join(&path);
            if !file.is_file() || is_structural(&path) || path.ends_with("/main.rs") {
                continue;
            }
            let content = fs::read_to_string(&file).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", file.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }

    #[test]
    fn test_unit_harness_declares_every_directory() {
        let harness = fs::read_to_string(Path::new(UNIT_DIR).join("main.rs")).unwrap_or_default();
        let undeclared: Vec<String> = collect(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.contains('/') && Path::new(UNIT_DIR).join(path).is_dir())
            .filter(|dir| !harness.contains(&format!("mod {dir};")))
            .collect();

        assert!(
            undeclared.is_empty(),
            "Unit test directories missing from tests/unit/main.rs: {undeclared:?}"
        );
    }
}
