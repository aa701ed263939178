use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Separator placed between reconstructed pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static HORIZONTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// The assembled resume text. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pages: Vec<String>,
    text: String,
}

impl Document {
    /// Wraps text that was already extracted elsewhere (e.g. stored resume
    /// context) as a single-page document.
    pub fn from_text(text: &str) -> Self {
        assemble(vec![text.to_string()])
    }

    /// Per-page reconstructed text, in page order, before normalization.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Normalized full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Joins page texts with a paragraph break and normalizes the result.
pub fn assemble(pages: Vec<String>) -> Document {
    let text = normalize(&pages.join(PAGE_SEPARATOR));
    Document { pages, text }
}

/// Collapses 3+ newlines to exactly two, runs of spaces/tabs to one space,
/// and trims the ends.
pub fn normalize(text: &str) -> String {
    let text = EXCESS_NEWLINES.replace_all(text, "\n\n");
    let text = HORIZONTAL_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
