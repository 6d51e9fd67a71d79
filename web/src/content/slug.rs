//! Slug derivation

/// Lowercase, hyphen-separated form of `title`, transliterating non-ASCII
/// characters ("Ünïcödé Post" becomes "unicode-post").
pub fn slugify(title: &str) -> String {
    ::slug::slugify(title)
}

/// Slug for a post: the explicit override as written when non-empty,
/// otherwise derived from the title. Always lowercase.
pub fn post_slug(explicit: Option<&str>, title: &str) -> String {
    match explicit.filter(|s| !s.is_empty()) {
        Some(slug) => slug.to_lowercase(),
        None => slugify(title).to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_title() {
        assert_eq!(post_slug(None, "Hello World"), "hello-world");
        assert_eq!(post_slug(None, "Rust: 2024 Edition!"), "rust-2024-edition");
    }

    #[test]
    fn transliterates_non_ascii() {
        assert_eq!(slugify("Ünïcödé Post"), "unicode-post");
    }

    #[test]
    fn explicit_slug_is_lowercased() {
        assert_eq!(post_slug(Some("My-Slug"), "Ignored"), "my-slug");
        assert_eq!(post_slug(Some("UPPER_case"), "Ignored"), "upper_case");
    }

    #[test]
    fn empty_override_falls_back_to_title() {
        assert_eq!(post_slug(Some(""), "Fallback Title"), "fallback-title");
    }

    #[test]
    fn explicit_slug_is_not_trimmed() {
        assert_eq!(post_slug(Some(" A B "), "Ignored"), " a b ");
        assert_eq!(post_slug(Some("   "), "Ignored"), "   ");
    }

    #[test]
    fn always_lowercase() {
        for title in ["ALL CAPS", "MiXeD CaSe", "Ça Va", "ß and ẞ"] {
            let slug = post_slug(None, title);
            assert_eq!(slug, slug.to_lowercase(), "{}", title);
        }
    }
}
