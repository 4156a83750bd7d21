//! Path helper functions

/// Join path segments with `/`
///
/// Leading and trailing slashes are trimmed from every segment and empty
/// segments are dropped.
///
/// # Examples
/// ```
/// use wxr2md::helpers::join_path;
///
/// assert_eq!(join_path(&["/export/", "", "post/", "hello.md"]), "export/post/hello.md");
/// ```
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref().trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&["a", "b.md"]), "a/b.md");
        assert_eq!(join_path(&["a/", "/b/", "c"]), "a/b/c");
        assert_eq!(join_path(&["", "post", "", "x.md"]), "post/x.md");
    }

    #[test]
    fn test_join_path_degenerate() {
        let none: [&str; 0] = [];
        assert_eq!(join_path(&none), "");
        assert_eq!(join_path(&["/", "//", ""]), "");
        assert_eq!(join_path(&[String::from("///only///")]), "only");
    }

    #[test]
    fn test_inner_slashes_are_kept() {
        assert_eq!(join_path(&["a//b", "c"]), "a//b/c");
    }
}
