//! Directory traversal and path collection

pub mod filter;

use std::path::Path;

use walkdir::WalkDir;

/// Walk `root` recursively and collect every file whose parent directory
/// path contains `substring` and whose name ends with `extension`.
///
/// Collected paths are joined from directory and file name with separators
/// normalized to `/`. Unreadable entries (permissions, vanished directories,
/// a missing root) are skipped and the rest of the tree is still processed.
/// The result is sorted so the manifest does not depend on OS directory
/// ordering.
pub fn scan(root: &Path, substring: &str, extension: &str) -> Vec<String> {
    let mut matches = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("✗ Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !filter::has_extension(&file_name, extension) {
            continue;
        }

        // The substring is matched on the directory path, never the file name.
        let dir_matches = entry.path().parent().is_some_and(|dir| {
            filter::directory_matches(&normalize_separators(dir), substring)
        });
        if !dir_matches {
            continue;
        }

        matches.push(normalize_separators(entry.path()));
    }

    matches.sort();
    matches
}

/// Force forward slashes so manifests are identical across platforms.
fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
