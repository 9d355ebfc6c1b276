//! Lexical path functions.
//!
//! These functions work on path strings only and never touch the filesystem:
//! - Cleaning redundant separators, `.` and `..` elements
//! - Joining elements with the platform separator
//! - Splitting off the directory, final element and extension
//!
//! Cleaning follows the conventional rules used by shell-oriented path
//! libraries, so `a//b/./c/..` becomes `a/b` and an empty string becomes `.`.

use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Returns true if `c` separates path elements on this platform.
///
/// `/` is a separator everywhere; `\` is one as well on Windows.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Return the shortest path name lexically equivalent to `path`.
///
/// Applies these rules until nothing changes:
/// 1. Replace multiple separators with a single one.
/// 2. Eliminate each `.` element.
/// 3. Eliminate each inner `..` element and the non-`..` element before it.
/// 4. Eliminate `..` elements that begin a rooted path.
///
/// The result never ends in a separator unless it is the root, and an empty
/// result becomes `.`.
///
/// # Examples
///
/// ```
/// use pathname::lexical::clean;
///
/// assert_eq!(clean("./"), ".");
/// assert_eq!(clean("demo/b/c/./"), "demo/b/c");
/// assert_eq!(clean("/a//b/../c"), "/a/c");
/// assert_eq!(clean("/.."), "/");
/// assert_eq!(clean("../../x"), "../../x");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with(is_separator);
    let mut elements: Vec<&str> = Vec::new();

    for element in path.split(is_separator) {
        match element {
            "" | "." => {}
            ".." => {
                if elements.last().is_some_and(|last| *last != "..") {
                    elements.pop();
                } else if !rooted {
                    // Relative paths keep leading ".." elements
                    elements.push("..");
                }
            }
            normal => elements.push(normal),
        }
    }

    let body = elements.join(MAIN_SEPARATOR_STR);
    if rooted {
        format!("{MAIN_SEPARATOR}{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Join path elements with the platform separator and clean the result.
///
/// Empty elements are skipped. If every element is empty the result is the
/// empty string. A rooted element after the first does not replace what came
/// before it; it is simply joined under it.
///
/// # Examples
///
/// ```
/// use pathname::lexical::join;
///
/// assert_eq!(join(&["/", "bbb"]), "/bbb");
/// assert_eq!(join(&["/", "/bbb/ccc"]), "/bbb/ccc");
/// assert_eq!(join(&["a", "/b"]), "a/b");
/// assert_eq!(join(&["", ""]), "");
/// ```
#[must_use]
pub fn join(elements: &[&str]) -> String {
    let non_empty: Vec<&str> = elements.iter().copied().filter(|e| !e.is_empty()).collect();
    if non_empty.is_empty() {
        return String::new();
    }
    clean(&non_empty.join(MAIN_SEPARATOR_STR))
}

/// Return everything but the last element of `path`, cleaned.
///
/// A path without any separator yields `.`; the root yields itself.
///
/// # Examples
///
/// ```
/// use pathname::lexical::dir;
///
/// assert_eq!(dir("demo/b/c"), "demo/b");
/// assert_eq!(dir("."), ".");
/// assert_eq!(dir("/"), "/");
/// assert_eq!(dir("file.txt"), ".");
/// ```
#[must_use]
pub fn dir(path: &str) -> String {
    match path.rfind(is_separator) {
        Some(index) => clean(&path[..=index]),
        None => ".".to_string(),
    }
}

/// Return the last element of `path`.
///
/// Trailing separators are removed first. An empty path yields `.` and a
/// path made only of separators yields a single separator.
///
/// # Examples
///
/// ```
/// use pathname::lexical::base;
///
/// assert_eq!(base("/abc/efg"), "efg");
/// assert_eq!(base("/abc/efg/"), "efg");
/// assert_eq!(base("."), ".");
/// assert_eq!(base(""), ".");
/// assert_eq!(base("///"), "/");
/// ```
#[must_use]
pub fn base(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR_STR.to_string();
    }
    match trimmed.rfind(is_separator) {
        Some(index) => trimmed[index + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Return the extension of the final element, including the leading dot.
///
/// Returns the empty string when the final element has no dot.
///
/// # Examples
///
/// ```
/// use pathname::lexical::ext;
///
/// assert_eq!(ext("demo.123"), ".123");
/// assert_eq!(ext("archive.tar.gz"), ".gz");
/// assert_eq!(ext("/demo"), "");
/// assert_eq!(ext("dir.d/file"), "");
/// ```
#[must_use]
pub fn ext(path: &str) -> &str {
    for (index, c) in path.char_indices().rev() {
        if is_separator(c) {
            break;
        }
        if c == '.' {
            return &path[index..];
        }
    }
    ""
}

/// Return true if `path` is rooted per platform convention.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    Path::new(path).is_absolute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_separators() {
        assert_eq!(clean("a//b///c"), "a/b/c");
        assert_eq!(clean("//a"), "/a");
    }

    #[test]
    fn test_clean_removes_current_dir() {
        assert_eq!(clean("./"), ".");
        assert_eq!(clean("demo/b/c/."), "demo/b/c");
        assert_eq!(clean("demo/b/c/./"), "demo/b/c");
        assert_eq!(clean("./a/./b"), "a/b");
    }

    #[test]
    fn test_clean_resolves_parent_dir() {
        assert_eq!(clean("a/b/../c"), "a/c");
        assert_eq!(clean("a/.."), ".");
        assert_eq!(clean("a/../.."), "..");
        assert_eq!(clean("../a/.."), "..");
        assert_eq!(clean("/../a"), "/a");
    }

    #[test]
    fn test_clean_root_and_empty() {
        assert_eq!(clean("/"), "/");
        assert_eq!(clean("///"), "/");
        assert_eq!(clean(""), ".");
    }

    #[test]
    fn test_clean_is_idempotent() {
        for s in ["a//b/./../c/", "/x/../../y", "../../z/.", "", "/"] {
            let once = clean(s);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn test_join_absolute_second_element() {
        assert_eq!(join(&["/", "bbb"]), "/bbb");
        assert_eq!(join(&["/", "/bbb/ccc"]), "/bbb/ccc");
        assert_eq!(join(&["base", "/abs"]), "base/abs");
    }

    #[test]
    fn test_join_skips_empty() {
        assert_eq!(join(&["", "a"]), "a");
        assert_eq!(join(&["a", ""]), "a");
        assert_eq!(join(&[]), "");
        assert_eq!(join(&["", ""]), "");
    }

    #[test]
    fn test_dir() {
        assert_eq!(dir("demo/b/c"), "demo/b");
        assert_eq!(dir("."), ".");
        assert_eq!(dir("/"), "/");
        assert_eq!(dir("/abc"), "/");
        assert_eq!(dir("abc"), ".");
        assert_eq!(dir("/abc/"), "/abc");
    }

    #[test]
    fn test_base() {
        assert_eq!(base("/abc/efg"), "efg");
        assert_eq!(base("/abc/efg/demo.123"), "demo.123");
        assert_eq!(base("."), ".");
        assert_eq!(base("/"), "/");
        assert_eq!(base("你好/世界"), "世界");
    }

    #[test]
    fn test_ext() {
        assert_eq!(ext("demo.123"), ".123");
        assert_eq!(ext("/demo"), "");
        assert_eq!(ext(".hidden"), ".hidden");
        assert_eq!(ext("a.b/c"), "");
        assert_eq!(ext("文件.文本"), ".文本");
    }

    #[test]
    #[cfg(unix)]
    fn test_is_absolute() {
        assert!(is_absolute("/abc"));
        assert!(!is_absolute("../abc"));
        assert!(!is_absolute(".123"));
        assert!(!is_absolute(""));
    }
}
