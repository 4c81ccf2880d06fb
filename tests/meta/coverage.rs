//! Keeps the unit test tree mirrored to the src module tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    // Module roots and entry points carry no testable logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn collect_rs_files(dir: &Path, base: &Path, into: &mut BTreeSet<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_rs_files(&path, base, into);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                if let Ok(relative) = path.strip_prefix(base) {
                    into.insert(relative.to_string_lossy().to_string());
                }
            }
        }
    }

    // Tests that every src file has a unit test file at the same relative
    // path under tests/unit
    // Verified by deleting one unit test file
    #[test]
    fn test_every_src_file_has_unit_tests() {
        let mut src_files = BTreeSet::new();
        collect_rs_files(Path::new("src"), Path::new("src"), &mut src_files);
        assert!(!src_files.is_empty(), "src tree must be readable");

        let mut test_files = BTreeSet::new();
        collect_rs_files(
            Path::new("tests/unit"),
            Path::new("tests/unit"),
            &mut test_files,
        );

        let missing: Vec<_> = src_files
            .iter()
            .filter(|path| !is_structural(path) && !test_files.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without unit test counterparts: {missing:?}"
        );
    }

    // Tests that no unit test file is orphaned from the src tree
    // Verified by adding a stray unit test file
    #[test]
    fn test_every_unit_test_has_src_counterpart() {
        let mut src_files = BTreeSet::new();
        collect_rs_files(Path::new("src"), Path::new("src"), &mut src_files);

        let mut test_files = BTreeSet::new();
        collect_rs_files(
            Path::new("tests/unit"),
            Path::new("tests/unit"),
            &mut test_files,
        );

        let orphaned: Vec<_> = test_files
            .iter()
            .filter(|path| !is_structural(path) && !src_files.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without src counterparts: {orphaned:?}"
        );
    }
}
