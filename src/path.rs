//! Site-relative path construction for navigation links. The two helpers here
//! are the only string manipulation the renderer performs on paths, and their
//! exact output is part of the link contract: [`substitute`] fills in a page
//! number and [`normalize`] prefixes the site's base path.

/// The placeholder token in a paginate path template.
pub const PLACEHOLDER: &str = ":num";

/// Replaces the [`PLACEHOLDER`] token in `template` with the decimal form of
/// `page`. A template without the token is returned unchanged.
pub fn substitute(template: &str, page: usize) -> String {
    template.replace(PLACEHOLDER, &page.to_string())
}

/// Prefixes `path` with `base_path` and collapses `//` into `/`.
///
/// The operands are concatenated as-is. The collapse is a single
/// left-to-right, non-overlapping pass, so `a///b` becomes `a//b` rather than
/// `a/b`. Links for an empty `base_path` depend on this.
pub fn normalize(base_path: &str, path: &str) -> String {
    let mut joined = String::with_capacity(base_path.len() + path.len());
    joined.push_str(base_path);
    joined.push_str(path);

    // `str::replace` scans once and resumes after each match.
    joined.replace("//", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCase {
        base_path: &'static str,
        path: &'static str,
        wanted: &'static str,
    }

    fn normalize_test(test_case: &TestCase) {
        let result = normalize(test_case.base_path, test_case.path);
        assert_eq!(
            test_case.wanted, result,
            "wanted \"{}\"; found \"{}\"",
            test_case.wanted, result
        );
    }

    #[test]
    fn test_normalize_empty_base_collapses_inner_double_slash() {
        normalize_test(&TestCase {
            base_path: "",
            path: "/a//b",
            wanted: "/a/b",
        })
    }

    #[test]
    fn test_normalize_prefixes_base() {
        normalize_test(&TestCase {
            base_path: "/root",
            path: "/a",
            wanted: "/root/a",
        })
    }

    #[test]
    fn test_normalize_joins_trailing_and_leading_slash() {
        normalize_test(&TestCase {
            base_path: "/root/",
            path: "/a",
            wanted: "/root/a",
        })
    }

    #[test]
    fn test_normalize_is_single_pass() {
        normalize_test(&TestCase {
            base_path: "",
            path: "/root///a",
            wanted: "/root//a",
        })
    }

    #[test]
    fn test_normalize_single_pass_across_operands() {
        normalize_test(&TestCase {
            base_path: "/root/",
            path: "//a",
            wanted: "/root//a",
        })
    }

    #[test]
    fn test_normalize_four_slashes() {
        normalize_test(&TestCase {
            base_path: "",
            path: "a////b",
            wanted: "a//b",
        })
    }

    #[test]
    fn test_normalize_no_separator_inserted() {
        normalize_test(&TestCase {
            base_path: "/root",
            path: "a",
            wanted: "/roota",
        })
    }

    #[test]
    fn test_normalize_root_page_under_empty_base() {
        normalize_test(&TestCase {
            base_path: "",
            path: "/",
            wanted: "/",
        })
    }

    #[test]
    fn test_normalize_base_with_root_path() {
        normalize_test(&TestCase {
            base_path: "/blog/",
            path: "/",
            wanted: "/blog/",
        })
    }

    #[test]
    fn test_substitute() {
        assert_eq!("/blog/page3/", substitute("/blog/page:num/", 3));
        assert_eq!("/blog/page12/", substitute("/blog/page:num/", 12));
    }

    #[test]
    fn test_substitute_without_placeholder() {
        assert_eq!("/blog/page/", substitute("/blog/page/", 3));
    }
}
