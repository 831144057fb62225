//! Main-content extraction from article HTML.
//!
//! Pure functions over an HTML string; fetching lives in `fetcher.rs`.

use scraper::{ElementRef, Html, Node, Selector};

use super::errors::ScrapeError;
use super::models::Article;
use crate::common::utils::count_words;

/// A selector match longer than this is accepted as the article body.
const MIN_CONTENT_CHARS: usize = 500;

/// Anything shorter than this after the paragraph fallback is rejected.
const MIN_FALLBACK_CONTENT_CHARS: usize = 100;

pub const UNTITLED_ARTICLE: &str = "Untitled Article";

/// Subtrees that never carry article text.
const BOILERPLATE_SELECTOR: &str =
    "script, style, nav, header, footer, aside, .advertisement, .ads, .social-share";

/// Elements whose text starts a new word run.
const BLOCK_ELEMENTS: [&str; 22] = [
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "h1", "h2",
    "h3", "h4", "h5", "h6", "hr", "li", "main", "p", "pre", "section", "td",
];

/// Candidate containers for the article body, most specific first.
const CONTENT_SELECTORS: [&str; 9] = [
    "article",
    "[role=main]",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content",
    "main",
    ".post-body",
    ".article-body",
];

/// Parse an HTML document into an [`Article`].
pub fn extract_article(html: &str) -> Result<Article, ScrapeError> {
    let mut document = Html::parse_document(html);

    let title = extract_title(&document);
    remove_boilerplate(&mut document);
    let content = extract_content(&document);

    if content.chars().count() < MIN_FALLBACK_CONTENT_CHARS {
        return Err(ScrapeError::InsufficientContent);
    }

    let word_count = count_words(&content);
    Ok(Article {
        title,
        content,
        word_count,
    })
}

/// `<title>`, then `og:title`, then a placeholder.
fn extract_title(document: &Html) -> String {
    let from_title_tag = Selector::parse("title").ok().and_then(|selector| {
        document
            .select(&selector)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    });

    let title = from_title_tag.or_else(|| {
        let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(normalize_whitespace)
            .filter(|t| !t.is_empty())
    });

    title.unwrap_or_else(|| UNTITLED_ARTICLE.to_string())
}

/// Detach scripts, navigation, ads and similar subtrees from the document.
fn remove_boilerplate(document: &mut Html) {
    let Ok(selector) = Selector::parse(BOILERPLATE_SELECTOR) else {
        return;
    };

    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn extract_content(document: &Html) -> String {
    let mut content = String::new();

    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            content = element_text(element);
            if content.chars().count() > MIN_CONTENT_CHARS {
                break;
            }
        }
    }

    if content.chars().count() < MIN_CONTENT_CHARS {
        content = paragraph_text(document);
    }

    normalize_whitespace(&content)
}

/// Every `<p>` in document order, joined with single spaces.
fn paragraph_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };
    document
        .select(&selector)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text nodes concatenated as-is; block elements and `<br>` add a break.
fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(el) if BLOCK_ELEMENTS.contains(&el.name()) => text.push(' '),
            _ => {}
        }
    }
    normalize_whitespace(&text)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
