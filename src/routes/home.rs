//! Landing page.

use axum::response::Html;

/// Minimal HTML index linking the API surface.
pub async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
    <head><title>Golden Dawn Tarot</title></head>
    <body style="font-family: Arial; margin: 40px; background: #1a1a2e; color: #eee;">
        <h1>Golden Dawn Tarot Service</h1>
        <p>Tarot readings using the complete Golden Dawn system</p>
        <ul>
            <li><a href="/health" style="color: #4CAF50;">Health Check</a></li>
            <li><a href="/cards" style="color: #4CAF50;">View All Cards</a></li>
            <li><a href="/spreads" style="color: #4CAF50;">Available Spreads</a></li>
        </ul>
    </body>
</html>"#,
    )
}
