//! HTML rendering of display blocks for Telegram's `ParseMode::Html`.
//!
//! Telegram messages have no accent color, so [`bot_core::Embed::color`] is dropped.

use bot_core::Embed;

/// Escapes the three characters Telegram's HTML mode treats specially.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Bold title, description, one `<b>name</b>: value` line per field, italic footer.
pub fn render_embed_html(embed: &Embed) -> String {
    let mut lines = vec![format!("<b>{}</b>", escape_html(&embed.title))];
    if let Some(description) = &embed.description {
        lines.push(escape_html(description));
    }
    if !embed.fields.is_empty() {
        lines.push(String::new());
        for field in &embed.fields {
            lines.push(format!(
                "<b>{}</b>: {}",
                escape_html(&field.name),
                escape_html(&field.value)
            ));
        }
    }
    if let Some(footer) = &embed.footer {
        lines.push(format!("<i>{}</i>", escape_html(footer)));
    }
    lines.join("\n")
}
