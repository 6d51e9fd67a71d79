//! `Link` header parsing (RFC 5988)
//!
//! GitHub paginates list endpoints with headers like
//! `<https://api.github.com/...&page=2>; rel="next", <...&page=9>; rel="last"`.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<([^>]*)>([^<]*)").expect("link pattern is valid"))
}

fn rel_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i);\s*rel\s*=\s*(?:"([^"]*)"|([^\s;,]+))"#).expect("rel pattern is valid")
    })
}

/// Map each relation type in a `Link` header to its target URL.
///
/// A link may declare several space-separated relations (`rel="next last"`).
/// When a relation appears twice the first link wins. Links without a
/// `rel` parameter are skipped.
pub fn parse_link_header(header: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();

    for caps in link_regex().captures_iter(header) {
        let url = caps[1].trim();
        let params = &caps[2];
        let Some(rel) = rel_regex().captures(params) else {
            continue;
        };
        let rels = rel.get(1).or_else(|| rel.get(2)).map_or("", |m| m.as_str());

        for name in rels.split_whitespace() {
            links
                .entry(name.to_lowercase())
                .or_insert_with(|| url.to_string());
        }
    }

    links
}

/// The `rel="next"` target of a `Link` header, if any
pub fn next_link(header: &str) -> Option<String> {
    parse_link_header(header).remove("next")
}
