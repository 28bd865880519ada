//! Plain-text backend. Mirrors the printed layout closely enough to eyeball a
//! preview in a terminal: right-aligned dates, underlined headings, bullets.

use std::fmt::Write;

use crate::projection::{ContactItem, Document, Line, Section};
use crate::render::{RenderBackend, RenderError, RenderedDocument};

const DEFAULT_WIDTH: usize = 80;
const MIN_GAP: usize = 4;
const BULLET: &str = "•";

#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
    width: usize,
}

impl PlainTextRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn render_to_string(&self, document: &Document) -> Result<String, RenderError> {
        let mut out = String::new();

        writeln!(out, "{}", document.header.name.text)?;
        let contact: Vec<String> = document
            .header
            .contact
            .items
            .iter()
            .map(|item| match item {
                ContactItem::Text { span } => span.text.clone(),
                ContactItem::Link { label, href } => format!("{} <{}>", label.text, href),
            })
            .collect();
        writeln!(out, "{}", contact.join(document.header.contact.separator))?;

        for section in &document.sections {
            writeln!(out)?;
            self.write_section(&mut out, section)?;
        }

        Ok(out)
    }

    fn write_section(&self, out: &mut String, section: &Section) -> Result<(), RenderError> {
        let heading = section.heading.text.to_uppercase();
        writeln!(out, "{heading}")?;
        writeln!(out, "{}", "-".repeat(heading.chars().count()))?;

        for block in &section.blocks {
            for line in &block.lines {
                match line {
                    Line::Split { left, right } => {
                        writeln!(out, "{}", self.split_line(&left.text, &right.text))?
                    }
                    Line::Bullet { text, .. } => writeln!(out, "  {BULLET} {}", text.text)?,
                    Line::LabelValue { label, value } => {
                        writeln!(out, "{}: {}", label.text, value.text)?
                    }
                }
            }
        }
        Ok(())
    }

    fn split_line(&self, left: &str, right: &str) -> String {
        let used = left.chars().count() + right.chars().count();
        let gap = self.width.saturating_sub(used).max(MIN_GAP);
        format!("{left}{}{right}", " ".repeat(gap))
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl RenderBackend for PlainTextRenderer {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn render(&self, document: &Document) -> Result<RenderedDocument, RenderError> {
        let text = self.render_to_string(document)?;
        Ok(RenderedDocument {
            content_type: "text/plain; charset=utf-8",
            bytes: text.into_bytes(),
        })
    }
}
