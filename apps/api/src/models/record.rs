//! Candidate record: the editable resume tree owned by a form session.
//!
//! Every list item carries an [`ItemId`] minted when the item is created. Ids are
//! never recomputed on reorder or removal, so callers can address "the same" row
//! across structural edits without relying on its position.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Identity
// ────────────────────────────────────────────────────────────────────────────

/// Stable identifier of a list item (degree, job, bullet, project, skill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Mints a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Implemented by every list item so collection code can look rows up by id.
pub trait Identified {
    fn id(&self) -> ItemId;
}

// ────────────────────────────────────────────────────────────────────────────
// List items
// ────────────────────────────────────────────────────────────────────────────

/// One line of a job or project description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletLine {
    pub id: ItemId,
    pub value: String,
}

impl BulletLine {
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            value: String::new(),
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            value: value.into(),
        }
    }
}

impl Default for BulletLine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub id: ItemId,
    pub degree: String,
    pub institution: String,
    #[serde(rename = "gradDate")]
    pub grad_date: String,
}

impl Degree {
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            degree: String::new(),
            institution: String::new(),
            grad_date: String::new(),
        }
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: ItemId,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<BulletLine>,
}

impl Job {
    /// A blank job with one empty bullet, so the bullet floor holds from creation.
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: vec![BulletLine::new()],
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<BulletLine>,
}

impl Project {
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            title: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: vec![BulletLine::new()],
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

/// A labelled skill group, e.g. `Languages: Rust, Go`.
/// `value` is a free comma-separated string and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: ItemId,
    pub category: String,
    #[serde(default)]
    pub value: String,
}

impl SkillCategory {
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            category: String::new(),
            value: String::new(),
        }
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> ItemId {
                    self.id
                }
            }
        )*
    };
}

impl_identified!(BulletLine, Degree, Job, Project, SkillCategory);

// ────────────────────────────────────────────────────────────────────────────
// Root record
// ────────────────────────────────────────────────────────────────────────────

/// The full resume being edited. Singleton root, so it carries no id.
///
/// `projects` and `skills` are optional sections: `None` and an empty vector both
/// mean "not provided" downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
    #[serde(rename = "gitHub", default)]
    pub git_hub: String,
    pub degrees: Vec<Degree>,
    pub jobs: Vec<Job>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,
}

impl CandidateRecord {
    /// A fresh editing buffer: blank personal fields, one blank degree, one blank job.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            phone_number: String::new(),
            email: String::new(),
            address: String::new(),
            linked_in: String::new(),
            git_hub: String::new(),
            degrees: vec![Degree::new()],
            jobs: vec![Job::new()],
            projects: None,
            skills: None,
        }
    }

    pub fn degree_mut(&mut self, id: ItemId) -> Option<&mut Degree> {
        find_mut(&mut self.degrees, id)
    }

    pub fn job_mut(&mut self, id: ItemId) -> Option<&mut Job> {
        find_mut(&mut self.jobs, id)
    }

    pub fn project_mut(&mut self, id: ItemId) -> Option<&mut Project> {
        self.projects.as_deref_mut().and_then(|p| find_mut(p, id))
    }

    /// Projects as a slice, treating an absent section as empty.
    pub fn project_list(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or_default()
    }

    /// Skills as a slice, treating an absent section as empty.
    pub fn skill_list(&self) -> &[SkillCategory] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn skill_mut(&mut self, id: ItemId) -> Option<&mut SkillCategory> {
        self.skills.as_deref_mut().and_then(|s| find_mut(s, id))
    }
}

impl Default for CandidateRecord {
    fn default() -> Self {
        Self::empty()
    }
}

pub fn find_mut<T: Identified>(items: &mut [T], id: ItemId) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

pub fn position_of<T: Identified>(items: &[T], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
