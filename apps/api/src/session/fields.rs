//! Addressing of editable string fields.
//!
//! Root fields are named directly; fields of list items are addressed by the
//! item's id so an edit lands on the right row even after the list changed shape.

use serde::{Deserialize, Serialize};

use crate::models::record::find_mut;
use crate::models::{BulletLine, CandidateRecord, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DegreeField {
    Degree,
    Institution,
    GradDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobField {
    Company,
    Position,
    Location,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Title,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillField {
    Category,
    Value,
}

/// A single editable string in a candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldRef {
    Name,
    PhoneNumber,
    Email,
    Address,
    #[serde(rename = "linkedIn")]
    LinkedIn,
    #[serde(rename = "gitHub")]
    GitHub,
    Degree { id: ItemId, field: DegreeField },
    Job { id: ItemId, field: JobField },
    JobBullet { job: ItemId, bullet: ItemId },
    Project { id: ItemId, field: ProjectField },
    ProjectBullet { project: ItemId, bullet: ItemId },
    Skill { id: ItemId, field: SkillField },
}

impl FieldRef {
    /// Resolves the field to its storage slot.
    ///
    /// Fails with the id of the first addressed item that is missing, which is
    /// the parent for bullet fields whose job or project is gone.
    pub fn slot<'a>(&self, record: &'a mut CandidateRecord) -> Result<&'a mut String, ItemId> {
        match *self {
            FieldRef::Name => Ok(&mut record.name),
            FieldRef::PhoneNumber => Ok(&mut record.phone_number),
            FieldRef::Email => Ok(&mut record.email),
            FieldRef::Address => Ok(&mut record.address),
            FieldRef::LinkedIn => Ok(&mut record.linked_in),
            FieldRef::GitHub => Ok(&mut record.git_hub),
            FieldRef::Degree { id, field } => {
                let degree = record.degree_mut(id).ok_or(id)?;
                Ok(match field {
                    DegreeField::Degree => &mut degree.degree,
                    DegreeField::Institution => &mut degree.institution,
                    DegreeField::GradDate => &mut degree.grad_date,
                })
            }
            FieldRef::Job { id, field } => {
                let job = record.job_mut(id).ok_or(id)?;
                Ok(match field {
                    JobField::Company => &mut job.company,
                    JobField::Position => &mut job.position,
                    JobField::Location => &mut job.location,
                    JobField::StartDate => &mut job.start_date,
                    JobField::EndDate => &mut job.end_date,
                })
            }
            FieldRef::JobBullet { job, bullet } => bullet_slot(
                &mut record.job_mut(job).ok_or(job)?.description,
                bullet,
            ),
            FieldRef::Project { id, field } => {
                let project = record.project_mut(id).ok_or(id)?;
                Ok(match field {
                    ProjectField::Title => &mut project.title,
                    ProjectField::StartDate => &mut project.start_date,
                    ProjectField::EndDate => &mut project.end_date,
                })
            }
            FieldRef::ProjectBullet { project, bullet } => bullet_slot(
                &mut record.project_mut(project).ok_or(project)?.description,
                bullet,
            ),
            FieldRef::Skill { id, field } => {
                let skill = record.skill_mut(id).ok_or(id)?;
                Ok(match field {
                    SkillField::Category => &mut skill.category,
                    SkillField::Value => &mut skill.value,
                })
            }
        }
    }
}

fn bullet_slot(lines: &mut [BulletLine], bullet: ItemId) -> Result<&mut String, ItemId> {
    find_mut(lines, bullet)
        .map(|line| &mut line.value)
        .ok_or(bullet)
}
