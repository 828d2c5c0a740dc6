//! Lexical cleaning of resource paths.

/// Normalizes `p` into either an empty string or an absolute path without a
/// trailing `/`.
///
/// Cleaning is purely lexical: repeated slashes collapse, `.` segments are
/// dropped, and `..` removes the preceding segment (never climbing above the
/// root). A path that cleans down to `/` becomes empty.
///
/// ```
/// use arnkit_arn::clean_path;
///
/// assert_eq!(clean_path("a/./b//c/"), "/a/b/c");
/// assert_eq!(clean_path("/"), "");
/// ```
pub fn clean_path(p: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in p.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut out = String::with_capacity(p.len() + 1);
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    out
}
