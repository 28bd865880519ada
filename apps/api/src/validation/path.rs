use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::ItemId;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(&'static str),
    /// A list position together with the id of the item found there.
    Item { index: usize, id: ItemId },
}

/// Location of a field inside a candidate record, rendered as `jobs[2].startDate`.
///
/// The index is what a reader sees; the id is what stays valid after the list is
/// edited. Both are kept so callers can pick either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn field(&self, name: &'static str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Field(name));
        Self(segments)
    }

    pub fn item(&self, index: usize, id: ItemId) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Item { index, id });
        Self(segments)
    }

    /// True if the path goes through the item with `id` at any depth.
    pub fn touches(&self, id: ItemId) -> bool {
        self.0
            .iter()
            .any(|segment| matches!(segment, Segment::Item { id: seg_id, .. } if *seg_id == id))
    }

    /// True if the rendered path equals `prefix` or continues it at a segment
    /// boundary, so `jobs[1]` matches `jobs[1].company` but not `jobs[10]`.
    /// An empty prefix matches every path.
    pub fn is_within(&self, prefix: &str) -> bool {
        let rendered = self.to_string();
        match rendered.strip_prefix(prefix) {
            Some(rest) => prefix.is_empty() || rest.is_empty() || rest.starts_with(|c| c == '.' || c == '['),
            None => false,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{name}")?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Item { index, .. } => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
