//! HTML page endpoints.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, Deserializer};

use super::posts::{fetch_posts, PostsQuery};
use crate::errors::AppError;
use crate::views::{self, Alert, AlertProps, Child, Severity};
use crate::AppState;

/// Query parameters for the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Perform the alert's close action before rendering.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub dismissed: bool,
    /// Alert severity (`information` or `warning`).
    #[serde(default, rename = "type")]
    pub severity: Option<String>,
}

/// Accept `1`, `true` and `yes` (any case) as set; anything else is unset.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    ))
}

fn welcome_alert(severity: Severity) -> Alert {
    Alert::new(
        AlertProps::new("Success")
            .severity(severity)
            .closable(true)
            .child(Child::Markup("<p>Posts are loaded straight from the database.</p>".to_string()))
            .child(Child::Markup(
                r#"<p>Browse them on the <a href="/posts">posts page</a>.</p>"#.to_string(),
            ))
            .child("Everything is really good!")
            .on_close(|| tracing::info!("Welcome alert closed")),
    )
}

/// GET / - Landing page with a dismissible alert.
pub async fn index_page(Query(query): Query<IndexQuery>) -> Html<String> {
    let severity = query
        .severity
        .as_deref()
        .and_then(Severity::from_str)
        .unwrap_or(Severity::Warning);

    let mut alert = welcome_alert(severity);
    if query.dismissed {
        alert.close();
    }
    tracing::debug!(state = ?alert.state(), "Rendering welcome alert");

    let body = format!(
        "<h1>Posts</h1>\n{}\n<p><a href=\"/posts\">All posts</a></p>",
        alert.render().unwrap_or_default()
    );
    Html(views::document("Posts", &body))
}

/// GET /posts - Posts list page, optionally filtered by title.
pub async fn posts_page(
    State(state): State<AppState>,
    Query(query): Query<PostsQuery>,
) -> Result<Html<String>, AppError> {
    let posts = fetch_posts(&state, &query).await?;
    Ok(Html(views::document("Posts", &views::render_posts(&posts))))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;

    fn parse(uri: &'static str) -> IndexQuery {
        let Query(query) = Query::<IndexQuery>::try_from_uri(&Uri::from_static(uri)).unwrap();
        query
    }

    #[test]
    fn test_dismissed_flag_values() {
        assert!(parse("/?dismissed=true").dismissed);
        assert!(parse("/?dismissed=1").dismissed);
        assert!(parse("/?dismissed=YES").dismissed);
        assert!(!parse("/?dismissed=0").dismissed);
        assert!(!parse("/?dismissed=false").dismissed);
        assert!(!parse("/").dismissed);
    }

    #[test]
    fn test_severity_param() {
        assert_eq!(parse("/?type=information").severity.as_deref(), Some("information"));
        assert_eq!(parse("/").severity, None);
    }
}
