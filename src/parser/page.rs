use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// How an element's text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Concatenated text nodes, like `textContent`. Used for short labelled fields.
    Raw,
    /// Layout-aware text with line breaks, like `innerText`. Used for description bodies.
    Rendered,
}

/// Read-only view over a parsed page snapshot.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Page {
            html: Html::parse_document(html),
        }
    }

    /// Normalized text of the first element matching `locator`, if any and non-empty.
    pub fn text_of(&self, locator: &str, mode: TextMode) -> Option<String> {
        let selector = parse_locator(locator)?;
        let el = self.html.select(&selector).next()?;
        let text = element_text(el, mode);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Raw text of every element matching `locator`, empties dropped.
    pub fn texts_of(&self, locator: &str) -> Vec<String> {
        let Some(selector) = parse_locator(locator) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .map(|el| element_text(el, TextMode::Raw))
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn parse_locator(locator: &str) -> Option<Selector> {
    match Selector::parse(locator) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("Invalid locator {:?}: {}", locator, e);
            None
        }
    }
}

fn element_text(el: ElementRef<'_>, mode: TextMode) -> String {
    match mode {
        TextMode::Raw => el.text().collect::<String>().trim().to_string(),
        TextMode::Rendered => rendered_text(el),
    }
}

// ── Rendered text ──

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];
const PARAGRAPH_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "hr",
];
const BLOCK_TAGS: &[&str] = &[
    "div", "section", "article", "header", "footer", "main", "aside", "nav", "ul", "ol",
    "li", "dl", "dt", "dd", "table", "tr", "form", "fieldset", "figure", "figcaption",
    "address", "details", "summary",
];
const CELL_TAGS: &[&str] = &["td", "th"];

/// Approximates `innerText`: block elements start new lines, paragraphs are
/// separated by a blank line, whitespace inside text runs collapses.
pub fn rendered_text(el: ElementRef<'_>) -> String {
    let mut buf = TextBuf::default();
    render_children(el, &mut buf, el.value().name() == "pre");
    buf.finish()
}

fn render_element(el: ElementRef<'_>, buf: &mut TextBuf, pre: bool) {
    let name = el.value().name();
    if SKIPPED_TAGS.contains(&name) {
        return;
    }
    if name == "br" {
        buf.hard_break();
        return;
    }

    let breaks = if PARAGRAPH_TAGS.contains(&name) {
        2
    } else if BLOCK_TAGS.contains(&name) {
        1
    } else {
        0
    };

    buf.block(breaks);
    render_children(el, buf, pre || name == "pre");
    buf.block(breaks);

    if CELL_TAGS.contains(&name) {
        buf.text(" ");
    }
}

fn render_children(el: ElementRef<'_>, buf: &mut TextBuf, pre: bool) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) if pre => buf.preformatted(text),
            Node::Text(text) => buf.text(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    render_element(child_el, buf, pre);
                }
            }
            _ => {}
        }
    }
}

#[derive(Default)]
struct TextBuf {
    out: String,
    pending_breaks: usize,
    space: bool,
}

impl TextBuf {
    fn text(&mut self, s: &str) {
        for c in s.chars() {
            if c.is_whitespace() {
                self.space = true;
                continue;
            }
            if self.pending_breaks > 0 {
                self.flush_breaks();
            } else if self.space && !self.out.is_empty() && !self.out.ends_with('\n') {
                self.out.push(' ');
            }
            self.space = false;
            self.out.push(c);
        }
    }

    fn preformatted(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.flush_breaks();
        self.space = false;
        self.out.push_str(s);
    }

    fn hard_break(&mut self) {
        self.flush_breaks();
        self.out.push('\n');
        self.space = false;
    }

    fn block(&mut self, breaks: usize) {
        self.pending_breaks = self.pending_breaks.max(breaks);
    }

    fn flush_breaks(&mut self) {
        if !self.out.is_empty() {
            let have = self.out.chars().rev().take_while(|&c| c == '\n').count();
            for _ in have..self.pending_breaks {
                self.out.push('\n');
            }
        }
        self.pending_breaks = 0;
        self.space = false;
    }

    fn finish(self) -> String {
        self.out
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}
