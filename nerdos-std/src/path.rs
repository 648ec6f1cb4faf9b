//! DOS-style volume paths such as `0:\docs\notes.txt`.
//!
//! `\` is the canonical separator, `/` is accepted wherever a path is read.

use alloc::string::String;
use alloc::vec::Vec;

pub const SEPARATOR: char = '\\';
pub const DEFAULT_VOLUME: &'static str = "0:";
pub const ROOT: &'static str = "0:\\";

pub fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

fn split_volume(path: &str) -> (Option<&str>, &str) {
    match path.find(':') {
        Some(index) if index > 0 && path[..index].chars().all(|c| c.is_ascii_alphanumeric()) => {
            (Some(&path[..=index]), &path[index + 1..])
        }
        _ => (None, path),
    }
}

/// A rooted path either names a volume or starts at the volume root.
pub fn is_rooted(path: &str) -> bool {
    let (volume, rest) = split_volume(path);
    volume.is_some() || rest.starts_with(is_separator)
}

/// Appends `path` to `base`. A rooted `path` replaces `base` entirely.
pub fn join(base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::from(base);
    }
    if base.is_empty() || is_rooted(path) {
        return String::from(path);
    }

    let mut joined = String::with_capacity(base.len() + path.len() + 1);
    joined.push_str(base);
    if !base.ends_with(is_separator) {
        joined.push(SEPARATOR);
    }
    joined.push_str(path);

    joined
}

/// Splits a path into its volume and the components left after resolving
/// `.` and `..`. `..` never climbs above the volume root.
pub fn components(path: &str) -> (&str, Vec<&str>) {
    let (volume, rest) = split_volume(path);
    let mut components = Vec::new();
    for component in rest.split(is_separator) {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }

    (volume.unwrap_or(DEFAULT_VOLUME), components)
}

/// Absolute canonical form, e.g. `0:\a\b`. The volume root keeps its
/// trailing separator.
pub fn normalize(path: &str) -> String {
    let (volume, components) = components(path);
    let mut normalized = String::with_capacity(path.len() + volume.len() + 1);
    normalized.push_str(volume);
    normalized.push(SEPARATOR);
    normalized.push_str(&components.join("\\"));

    normalized
}

/// Last component of `path`, or an empty string for a volume root.
pub fn file_name(path: &str) -> &str {
    let (_, rest) = split_volume(path);
    match rest.rfind(is_separator) {
        Some(index) => &rest[index + 1..],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_appends_relative_paths() {
        assert_eq!(join("0:\\", "docs"), "0:\\docs");
        assert_eq!(join("0:\\docs", "notes.txt"), "0:\\docs\\notes.txt");
        assert_eq!(join("0:\\docs\\", "a/b"), "0:\\docs\\a/b");
        assert_eq!(join("0:\\docs", ""), "0:\\docs");
    }

    #[test]
    fn rooted_paths_override_the_base() {
        assert_eq!(join("0:\\docs", "\\tmp"), "\\tmp");
        assert_eq!(join("0:\\docs", "1:\\tmp"), "1:\\tmp");
        assert!(is_rooted("/tmp"));
        assert!(is_rooted("0:"));
        assert!(!is_rooted("tmp\\0:"));
        assert!(!is_rooted("tmp"));
    }

    #[test]
    fn normalize_resolves_dots_and_separators() {
        assert_eq!(normalize("0:\\"), "0:\\");
        assert_eq!(normalize("0:\\a\\.\\b\\\\c\\"), "0:\\a\\b\\c");
        assert_eq!(normalize("0:\\a\\b\\..\\c"), "0:\\a\\c");
        assert_eq!(normalize("0:/a/b"), "0:\\a\\b");
        assert_eq!(normalize("\\a"), "0:\\a");
    }

    #[test]
    fn parent_of_root_is_root() {
        assert_eq!(normalize("0:\\..\\..\\x"), "0:\\x");
        assert_eq!(normalize(&join("0:\\", "..")), "0:\\");
    }

    #[test]
    fn file_name_is_last_component() {
        assert_eq!(file_name("0:\\docs\\notes.txt"), "notes.txt");
        assert_eq!(file_name("0:\\docs"), "docs");
        assert_eq!(file_name("0:\\"), "");
        assert_eq!(file_name("plain"), "plain");
    }

    #[test]
    fn components_reports_volume() {
        let (volume, parts) = components("1:\\x\\y");
        assert_eq!(volume, "1:");
        assert_eq!(parts, ["x", "y"]);
    }
}
