//! Shared utility functions for barrel generation.

use std::path::{Component, Path, PathBuf};

/// Remove every character that is not an ASCII letter or digit
/// (e.g., "a/b/Foo.ts" -> "abFoots")
pub fn strip_non_alphanumeric(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// The part of an export key before its first `.` (e.g., "Foo.tsx" -> "Foo")
pub fn export_name(key: &str) -> &str {
    key.split('.').next().unwrap_or(key)
}

/// Whether `name` can be used as a binding in generated TypeScript: an ASCII
/// letter, `_` or `$` followed by letters, digits, `_` or `$`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Remove `suffix` from the end of `name` unless that would leave nothing,
/// matching how base names drop an extension.
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    match name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Lexical path from `from` to `to`, without touching the filesystem.
///
/// Both paths must be in the same form (both absolute or both relative to
/// the same base); `.` components are ignored.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let to: Vec<Component> = to
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

/// Join the normal components of `path` with forward slashes.
///
/// An empty or current-directory path renders as ".".
pub fn to_posix(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
