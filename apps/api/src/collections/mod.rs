//! Editable-collection controller: append, remove, and move over the list-valued
//! parts of a candidate record.
//!
//! # Rules
//! - New items always go to the end with a freshly minted id.
//! - Removal is by id and never errors: unknown ids and the first entry of a
//!   floor-protected list (degrees, jobs) are silently kept.
//! - Bullet lists are addressed through their parent's id, never its position.
//! - No operation touches the id or fields of any other item.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::record::position_of;
use crate::models::{
    BulletLine, CandidateRecord, Degree, Identified, ItemId, Job, Project, SkillCategory,
};

/// Which list an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectionTarget {
    Degrees,
    Jobs,
    JobBullets { job: ItemId },
    Projects,
    ProjectBullets { project: ItemId },
    Skills,
}

impl CollectionTarget {
    /// Lists whose first entry can never be removed.
    pub fn is_floor_protected(&self) -> bool {
        matches!(self, CollectionTarget::Degrees | CollectionTarget::Jobs)
    }
}

impl fmt::Display for CollectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionTarget::Degrees => f.write_str("degrees"),
            CollectionTarget::Jobs => f.write_str("jobs"),
            CollectionTarget::JobBullets { job } => write!(f, "jobs[{job}].description"),
            CollectionTarget::Projects => f.write_str("projects"),
            CollectionTarget::ProjectBullets { project } => {
                write!(f, "projects[{project}].description")
            }
            CollectionTarget::Skills => f.write_str("skills"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Parent item {parent} for {target} not found")]
    UnknownParent {
        target: CollectionTarget,
        parent: ItemId,
    },
}

/// Appends a blank item to `target` and returns its id.
pub fn append(
    record: &mut CandidateRecord,
    target: CollectionTarget,
) -> Result<ItemId, CollectionError> {
    let id = match target {
        CollectionTarget::Degrees => push(&mut record.degrees, Degree::new()),
        CollectionTarget::Jobs => push(&mut record.jobs, Job::new()),
        CollectionTarget::JobBullets { job } => {
            let parent = record
                .job_mut(job)
                .ok_or(CollectionError::UnknownParent { target, parent: job })?;
            push(&mut parent.description, BulletLine::new())
        }
        CollectionTarget::Projects => {
            push(record.projects.get_or_insert_with(Vec::new), Project::new())
        }
        CollectionTarget::ProjectBullets { project } => {
            let parent = record.project_mut(project).ok_or(CollectionError::UnknownParent {
                target,
                parent: project,
            })?;
            push(&mut parent.description, BulletLine::new())
        }
        CollectionTarget::Skills => {
            push(record.skills.get_or_insert_with(Vec::new), SkillCategory::new())
        }
    };

    debug!(%target, %id, "Appended item");
    Ok(id)
}

/// Removes the item `id` from `target`. Returns whether anything was removed.
pub fn remove(record: &mut CandidateRecord, target: CollectionTarget, id: ItemId) -> bool {
    let floor = target.is_floor_protected();
    let removed = match target {
        CollectionTarget::Degrees => remove_from(&mut record.degrees, id, floor),
        CollectionTarget::Jobs => remove_from(&mut record.jobs, id, floor),
        CollectionTarget::JobBullets { job } => record
            .job_mut(job)
            .is_some_and(|parent| remove_from(&mut parent.description, id, floor)),
        CollectionTarget::Projects => record
            .projects
            .as_mut()
            .is_some_and(|items| remove_from(items, id, floor)),
        CollectionTarget::ProjectBullets { project } => record
            .project_mut(project)
            .is_some_and(|parent| remove_from(&mut parent.description, id, floor)),
        CollectionTarget::Skills => record
            .skills
            .as_mut()
            .is_some_and(|items| remove_from(items, id, floor)),
    };

    if removed {
        debug!(%target, %id, "Removed item");
    } else {
        debug!(%target, %id, "Remove ignored: unknown or protected item");
    }
    removed
}

/// Moves item `id` to `to_index` (clamped to the last position).
/// Returns whether the order changed.
pub fn move_item(
    record: &mut CandidateRecord,
    target: CollectionTarget,
    id: ItemId,
    to_index: usize,
) -> bool {
    match target {
        CollectionTarget::Degrees => move_within(&mut record.degrees, id, to_index),
        CollectionTarget::Jobs => move_within(&mut record.jobs, id, to_index),
        CollectionTarget::JobBullets { job } => record
            .job_mut(job)
            .is_some_and(|parent| move_within(&mut parent.description, id, to_index)),
        CollectionTarget::Projects => record
            .projects
            .as_mut()
            .is_some_and(|items| move_within(items, id, to_index)),
        CollectionTarget::ProjectBullets { project } => record
            .project_mut(project)
            .is_some_and(|parent| move_within(&mut parent.description, id, to_index)),
        CollectionTarget::Skills => record
            .skills
            .as_mut()
            .is_some_and(|items| move_within(items, id, to_index)),
    }
}

fn push<T: Identified>(items: &mut Vec<T>, item: T) -> ItemId {
    let id = item.id();
    items.push(item);
    id
}

fn remove_from<T: Identified>(items: &mut Vec<T>, id: ItemId, floor_protected: bool) -> bool {
    match position_of(items, id) {
        Some(0) if floor_protected => false,
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

fn move_within<T: Identified>(items: &mut Vec<T>, id: ItemId, to_index: usize) -> bool {
    let Some(from) = position_of(items, id) else {
        return false;
    };
    let to = to_index.min(items.len() - 1);
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
