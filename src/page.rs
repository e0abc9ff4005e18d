use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html};

// Elements whose text never renders on the page.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "head", "template"];

/// Fetches a URL and returns the visible text of its HTML body.
///
/// Unlike the signal checkers, fetch failures carry no fallback score:
/// the error surfaces to the caller with enough context to explain what
/// went wrong.
pub async fn fetch_page_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {url}"))?;

    if !response.status().is_success() {
        return Err(anyhow!("{url} returned HTTP {}", response.status()));
    }

    let html = response
        .text()
        .await
        .with_context(|| format!("failed to read response body from {url}"))?;

    let text = extract_visible_text(&html);
    if text.is_empty() {
        return Err(anyhow!("{url} contained no extractable text"));
    }

    Ok(text)
}

/// Concatenates the text nodes of a parsed document, skipping elements
/// that never render (scripts, styles, the head).
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();
    collect_text(document.root_element(), &mut parts);
    parts.join(" ")
}

fn collect_text(element: ElementRef, parts: &mut Vec<String>) {
    if HIDDEN_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, parts);
        }
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
