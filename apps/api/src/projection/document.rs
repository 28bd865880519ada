//! Renderable document tree handed to a render backend.
//!
//! The tree is layout-agnostic: it says what text appears, in which order, and
//! with which style tag. How a tag looks is the backend's business.

use serde::Serialize;

use crate::models::ItemId;

/// Style tag attached to every piece of text in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Name,
    ContactItem,
    ContactLink,
    SectionHeading,
    /// Left side of an entry's first line: company, degree, project title.
    EntryTitle,
    /// Right-aligned dates.
    EntryDates,
    /// Left side of a job's second line.
    EntrySubtitle,
    EntryLocation,
    BulletText,
    SkillLabel,
    SkillValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactItem {
    Text { span: Span },
    Link { label: Span, href: String },
}

#[cfg(test)]
impl ContactItem {
    /// The visible text of the item.
    pub fn text(&self) -> &str {
        match self {
            ContactItem::Text { span } => &span.text,
            ContactItem::Link { label, .. } => &label.text,
        }
    }
}

/// One row of contact details, joined by `separator` when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    pub separator: &'static str,
    pub items: Vec<ContactItem>,
}

#[cfg(test)]
impl ContactLine {
    /// Contact items joined by the separator, links shown by label.
    pub fn joined_text(&self) -> String {
        self.items
            .iter()
            .map(ContactItem::text)
            .collect::<Vec<_>>()
            .join(self.separator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: Span,
    pub contact: ContactLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Line {
    /// Left-aligned and right-aligned text on the same row.
    Split { left: Span, right: Span },
    Bullet { id: ItemId, text: Span },
    LabelValue { label: Span, value: Span },
}

/// The lines produced from one source item (a degree, job, project, skill).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub source_id: ItemId,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Education,
    WorkExperience,
    Projects,
    Skills,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Education => "Education",
            SectionKind::WorkExperience => "Work Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Span,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub header: Header,
    pub sections: Vec<Section>,
}

#[cfg(test)]
impl Document {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|section| section.kind).collect()
    }
}
