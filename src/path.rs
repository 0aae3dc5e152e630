//! Canonical path form shared by registration and lookup.
//!
//! A canonical path has no leading or trailing slash and no empty segments,
//! so `"//users///42/"` and `"users/42"` are the same path. The root is the
//! empty string.

const SLASH: char = '/';

/// Normalizes a raw path into its canonical slash-free form.
///
/// ```
/// use trail_router::path::normalize;
///
/// assert_eq!(normalize("/users//42/"), "users/42");
/// assert_eq!(normalize("///"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for seg in segments(raw) {
        if !out.is_empty() {
            out.push(SLASH);
        }
        out.push_str(seg);
    }
    out
}

/// Joins a group prefix and a route uri, then normalizes the result.
pub fn join(prefix: &str, uri: &str) -> String {
    let mut raw = String::with_capacity(prefix.len() + uri.len() + 1);
    raw.push_str(prefix);
    raw.push(SLASH);
    raw.push_str(uri.trim_matches(SLASH));
    normalize(&raw)
}

/// Iterates the non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SLASH).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn normalize_cases() {
        let cases = [
            ("", ""),
            ("/", ""),
            ("//", ""),
            ("users", "users"),
            ("/users/", "users"),
            ("users//42", "users/42"),
            ("//a///b/c//", "a/b/c"),
            ("/{id}/", "{id}"),
        ];
        for &(raw, expected) in cases.iter() {
            assert_eq!(normalize(raw), expected, "raw = {:?}", raw);
        }
    }

    #[test]
    fn join_prefix() {
        assert_eq!(join("", "/"), "");
        assert_eq!(join("", "/list"), "list");
        assert_eq!(join("/admin", "/list"), "admin/list");
        assert_eq!(join("admin/", "list/"), "admin/list");
        assert_eq!(join("/admin", ""), "admin");
    }

    #[test]
    fn root_has_no_segments() {
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("a/b").collect::<Vec<_>>(), ["a", "b"]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[a-z/{}]{0,24}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!once.starts_with('/'));
            prop_assert!(!once.ends_with('/'));
            prop_assert!(!once.contains("//"));
        }

        #[test]
        fn extra_slashes_do_not_change_the_path(parts in proptest::collection::vec("[a-z0-9]{1,6}", 0..6)) {
            let plain = parts.join("/");
            let noisy = format!("//{}///", parts.join("//"));
            prop_assert_eq!(normalize(&noisy), normalize(&plain));
        }
    }
}
