//! Page title/author text bindings.
//!
//! The bindings are pure: they compute strings and push them into any
//! [`TextTarget`]. The web host implements the trait over the DOM.

pub const DEFAULT_TITLE: &str = "바다";
pub const DEFAULT_AUTHOR: &str = "김해솔";
pub const DEFAULT_YEAR: &str = "2025";
pub const DEFAULT_TITLE_SELECTOR: &str = ".title";
pub const DEFAULT_AUTHOR_SELECTOR: &str = ".author";

/// Something that can receive the document title and per-selector text.
pub trait TextTarget {
    fn set_document_title(&mut self, title: &str);
    /// Replace the text of every element matched by `selector`; no match is a no-op.
    fn set_text_all(&mut self, selector: &str, text: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleTemplate {
    pub title: String,
    pub author: String,
    pub year: String,
    pub title_selector: String,
    pub author_selector: String,
}

impl Default for TitleTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_AUTHOR, DEFAULT_YEAR)
    }
}

impl TitleTemplate {
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            author_selector: DEFAULT_AUTHOR_SELECTOR.to_string(),
        }
    }

    /// Override selectors; empty strings keep the defaults.
    pub fn with_selectors(mut self, title_selector: &str, author_selector: &str) -> Self {
        if !title_selector.is_empty() {
            self.title_selector = title_selector.to_string();
        }
        if !author_selector.is_empty() {
            self.author_selector = author_selector.to_string();
        }
        self
    }

    pub fn document_title(&self) -> String {
        format!("{} - {}", self.author, self.title)
    }

    pub fn author_line(&self) -> String {
        format!("{} ({})", self.author, self.year)
    }

    pub fn apply<T: TextTarget + ?Sized>(&self, target: &mut T) {
        target.set_document_title(&self.document_title());
        target.set_text_all(&self.title_selector, &self.title);
        target.set_text_all(&self.author_selector, &self.author_line());
    }
}
