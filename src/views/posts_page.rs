//! Posts list page.

use super::escape;
use crate::models::Post;

/// Render the list of posts.
pub fn render_posts(posts: &[Post]) -> String {
    let mut html = String::from("<main>\n<h2>Posts</h2>\n<ul>\n");
    for post in posts {
        html.push_str(&format!(
            concat!(
                "<li>",
                r#"<span style="color: red">{}</span>"#,
                r#"<p style="border-style: solid; border-width: 1px; border-color: red; padding: 5px">{}</p>"#,
                "</li>\n"
            ),
            escape(&post.title),
            escape(&post.description)
        ));
    }
    html.push_str("</ul>\n</main>");
    html
}
