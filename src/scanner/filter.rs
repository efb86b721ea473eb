/// Return true if the directory path contains `substring` anywhere.
/// Literal, case-sensitive match; no glob or regex semantics.
pub fn directory_matches(dir_path: &str, substring: &str) -> bool {
    dir_path.contains(substring)
}

/// Return true if the file name ends with `extension`.
/// Literal, case-sensitive suffix match, so "noise.gltfoo" does not
/// match ".gltf".
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name.ends_with(extension)
}
