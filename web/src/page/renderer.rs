//! Page renderer
//!
//! Renders posts into the index page. Titles and attributes are escaped;
//! post HTML is inserted as rendered.

use askama::Template;

use crate::domain::entities::Post;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    title: &'a str,
    heading: &'a str,
    posts: &'a [Post],
}

/// Render the index page
pub fn render_index(title: &str, heading: &str, posts: &[Post]) -> Result<String, askama::Error> {
    IndexPage {
        title,
        heading,
        posts,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::issue_parser::parse_issue;
    use crate::content::MarkdownRenderer;
    use crate::test_utils::test_issue;

    fn post(title: &str, body: &str) -> Post {
        parse_issue(test_issue(title, body, &["Published"]), &MarkdownRenderer::default())
    }

    #[test]
    fn render_index_empty() {
        let result = render_index("GitHub CMS", "Welcome to my blog", &[]).unwrap();

        assert!(result.contains("<title>GitHub CMS</title>"));
        assert!(result.contains("<h1>Welcome to my blog</h1>"));
        assert!(result.contains("No posts yet."));
        assert!(!result.contains("class=\"post\""));
    }

    #[test]
    fn render_index_with_posts() {
        let posts = vec![post("First Post", "Hello *there*"), post("Second", "Bye")];

        let result = render_index("GitHub CMS", "Welcome to my blog", &posts).unwrap();

        assert!(result.contains("id=\"first-post\""));
        assert!(result.contains("<h2>First Post</h2>"));
        assert!(result.contains("<p>Hello <em>there</em></p>"));
        assert!(result.contains("<h2>Second</h2>"));
        assert!(!result.contains("No posts yet."));
        let first = result.find("First Post").unwrap();
        let second = result.find("<h2>Second</h2>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn render_index_escapes_titles() {
        let posts = vec![post("Tom & Jerry <3", "Body")];

        let result = render_index("Me & You", "Hi", &posts).unwrap();

        assert!(result.contains("<title>Me &amp; You</title>"));
        assert!(result.contains("<h2>Tom &amp; Jerry &lt;3</h2>"));
    }

    #[test]
    fn render_index_keeps_post_html() {
        let posts = vec![post("Raw", "<div class=\"note\">kept</div>\n")];

        let result = render_index("GitHub CMS", "Welcome", &posts).unwrap();

        assert!(result.contains("<div class=\"note\">kept</div>"));
    }
}
