//! HTML rendering of a [`CardView`](crate::CardView) state.
//!
//! Each [`ViewState`] maps to exactly one [`Panel`]; a panel renders itself
//! as an HTML fragment through [`Display`](fmt::Display). [`page`] wraps a
//! panel in the full LlamaVocs document.

use std::fmt;

use llamavocs_store::Card;

use crate::view::ViewState;

/// Shown when a failed call carried no message.
pub const FALLBACK_ERROR: &str = "Unable to load vocabulary card";

/// Troubleshooting hint shown under every error.
pub const CONNECTIVITY_HINT: &str =
    "Make sure your database is connected and contains some vocabulary cards.";

const TITLE: &str = "LlamaVocs";
const TAGLINE: &str = "Learn vocabulary with spaced repetition and interactive flashcards";
const TECH_STACK: &str = "Tech Stack: Rust • axum • SQLite • tokio";

/// What the card view shows for one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// Placeholder layout while the call is in flight. Shows no data.
    Skeleton,
    /// The call failed.
    Error { message: String },
    /// The call succeeded but the store has no cards.
    Empty,
    /// A card.
    Card(Card),
}

impl From<&ViewState> for Panel {
    fn from(state: &ViewState) -> Self {
        match state {
            ViewState::Idle | ViewState::Pending => Panel::Skeleton,
            ViewState::Failed { message } => Panel::Error {
                message: message
                    .clone()
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
            },
            ViewState::Succeeded(None) => Panel::Empty,
            ViewState::Succeeded(Some(card)) => Panel::Card(card.clone()),
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Skeleton => f.write_str(
                r#"<div class="panel skeleton" aria-busy="true">
  <div class="bar meta"></div>
  <div class="bar front"></div>
  <div class="bar back"></div>
  <div class="bar created"></div>
</div>"#,
            ),
            Panel::Error { message } => write!(
                f,
                r#"<div class="panel error" role="alert">
  <h3>Oops! Something went wrong</h3>
  <p class="message">{}</p>
  <p class="hint">{}</p>
</div>"#,
                escape_html(message),
                CONNECTIVITY_HINT,
            ),
            Panel::Empty => f.write_str(
                r#"<div class="panel empty">
  <h3>No vocabulary cards found</h3>
  <p>Add some vocabulary cards to your database to get started!</p>
</div>"#,
            ),
            Panel::Card(card) => write!(
                f,
                r#"<div class="panel card" data-id="{id}">
  <span class="meta">{language} • Difficulty {difficulty}/5</span>
  <h2 class="front">{front}</h2>
  <p class="back">{back}</p>
  <div class="created">Created: {created}</div>
</div>"#,
                id = escape_html(card.id.as_str()),
                language = escape_html(&card.language),
                difficulty = card.difficulty,
                front = escape_html(&card.front),
                back = escape_html(&card.back),
                created = card.created_at.format("%B %-d, %Y"),
            ),
        }
    }
}

/// Render the complete LlamaVocs page around `panel`.
pub fn page(panel: &Panel) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{TITLE}</title>
<style>
body {{ font-family: system-ui, sans-serif; background: #eef2ff; color: #111827; margin: 0; }}
main {{ max-width: 40rem; margin: 0 auto; padding: 2rem 1rem; text-align: center; }}
.panel {{ background: #fff; border-radius: 0.5rem; padding: 2rem; margin: 3rem auto; max-width: 28rem; }}
.panel.error {{ background: #fef2f2; color: #991b1b; }}
.panel.empty {{ background: #fefce8; color: #854d0e; }}
.skeleton .bar {{ background: #e5e7eb; border-radius: 0.25rem; height: 1rem; margin: 1rem auto; width: 8rem; }}
.meta {{ font-size: 0.875rem; text-transform: uppercase; color: #6b7280; }}
.created {{ font-size: 0.75rem; color: #9ca3af; }}
footer {{ font-size: 0.875rem; color: #6b7280; }}
</style>
</head>
<body>
<main>
<h1>🦙 {TITLE}</h1>
<p class="tagline">{TAGLINE}</p>
{panel}
<footer>{TECH_STACK}</footer>
</main>
</body>
</html>
"#
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
